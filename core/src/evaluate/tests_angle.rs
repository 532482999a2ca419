use super::*;
use crate::question::{AngleQuestion, AngleVariant};

fn variant(id: &str, target_deg: f64, tolerance_deg: f64, correct: bool) -> AngleVariant {
    AngleVariant { id: id.into(), label: None, target_deg, tolerance_deg, correct }
}

fn single(target: f64, tolerance: f64) -> VisualQuestion {
    VisualQuestion::Angle(AngleQuestion::single(target, tolerance))
}

#[test]
fn test_single_mode_tolerance_boundary() {
    let q = single(60.0, 2.0);
    assert!(evaluate_visual(&q, &VisualAnswer::Numeric(58.0)));
    assert!(!evaluate_visual(&q, &VisualAnswer::Numeric(57.9)));
    assert!(evaluate_visual(&q, &VisualAnswer::Numeric(62.0)));
    assert!(!evaluate_visual(&q, &VisualAnswer::Numeric(62.1)));
    assert!(evaluate_visual(&q, &VisualAnswer::Numeric(60.0)));
}

#[test]
fn test_single_mode_accepts_any_target() {
    let mut angle = AngleQuestion::single(60.0, 2.0);
    angle.variants.push(variant("obtuse", 120.0, 2.0, false));
    let q = VisualQuestion::Angle(angle);

    assert!(evaluate_visual(&q, &VisualAnswer::Numeric(60.0)));
    assert!(evaluate_visual(&q, &VisualAnswer::Numeric(120.0)));
    assert!(evaluate_visual(&q, &VisualAnswer::Numeric(121.5)));
    assert!(!evaluate_visual(&q, &VisualAnswer::Numeric(90.0)));
}

#[test]
fn test_single_mode_each_target_uses_its_own_tolerance() {
    let mut angle = AngleQuestion::single(30.0, 1.0);
    angle.variants.push(variant("wide", 100.0, 10.0, false));
    let q = VisualQuestion::Angle(angle);

    assert!(!evaluate_visual(&q, &VisualAnswer::Numeric(35.0)));
    assert!(evaluate_visual(&q, &VisualAnswer::Numeric(92.0)));
}

#[test]
fn test_single_mode_overlapping_bands_accept_first_match() {
    // 50 is closer to 55 but inside the wider band around 40
    let mut angle = AngleQuestion::single(40.0, 10.0);
    angle.variants.push(variant("near", 55.0, 1.0, false));
    let q = VisualQuestion::Angle(angle);
    assert!(evaluate_visual(&q, &VisualAnswer::Numeric(50.0)));
}

#[test]
fn test_single_mode_needs_a_number() {
    let q = single(60.0, 2.0);
    assert!(!evaluate_visual(&q, &VisualAnswer::Empty));
    assert!(!evaluate_visual(&q, &VisualAnswer::selection_of(["60"])));
    assert!(!evaluate_visual(&q, &VisualAnswer::Numeric(f64::NAN)));
}

#[test]
fn test_single_mode_is_not_circular() {
    // Plain absolute difference: 359 is not within 2° of 1
    let q = single(1.0, 2.0);
    assert!(!evaluate_visual(&q, &VisualAnswer::Numeric(359.0)));
}

#[test]
fn test_multi_mode_selects_options() {
    let mut angle = AngleQuestion::single(45.0, 2.0);
    angle.multi = true;
    angle.base_correct = true;
    angle.variants.push(variant("v1", 90.0, 2.0, false));
    angle.variants.push(variant("v2", 135.0, 2.0, true));
    let q = VisualQuestion::Angle(angle);

    assert!(evaluate_visual(&q, &VisualAnswer::selection_of(["v2", BASE_OPTION_ID])));
    assert!(!evaluate_visual(&q, &VisualAnswer::selection_of(["v2"])));
    assert!(!evaluate_visual(&q, &VisualAnswer::selection_of(["base", "v1", "v2"])));
    // Numbers mean nothing in multi mode
    assert!(!evaluate_visual(&q, &VisualAnswer::Numeric(45.0)));
}

#[test]
fn test_multi_mode_without_base() {
    let mut angle = AngleQuestion::single(45.0, 2.0);
    angle.multi = true;
    angle.variants.push(variant("v1", 90.0, 2.0, true));
    let q = VisualQuestion::Angle(angle);

    assert!(evaluate_visual(&q, &VisualAnswer::selection_of(["v1"])));
    assert!(!evaluate_visual(&q, &VisualAnswer::selection_of(["base", "v1"])));
    assert_eq!(correct_selection(&q), Some(["v1".to_string()].into_iter().collect()));
}
