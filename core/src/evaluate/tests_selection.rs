use super::*;
use crate::geometry::{LineSegment, Relation, Shape};
use crate::question::*;

fn answer(ids: &[&str]) -> VisualAnswer {
    VisualAnswer::from(ids)
}

fn pie_question() -> VisualQuestion {
    let segment = |id: &str, correct: bool| PieSegment {
        id: id.into(),
        value: 1.0 / 3.0,
        label: None,
        correct,
    };
    VisualQuestion::Pie(PieQuestion {
        segments: vec![segment("a", true), segment("b", false), segment("c", true)],
        multi: true,
        variants: vec![],
    })
}

#[test]
fn test_pie_exact_set() {
    let q = pie_question();
    assert!(evaluate_visual(&q, &answer(&["a", "c"])));
    assert!(evaluate_visual(&q, &answer(&["c", "a"])));

    assert!(!evaluate_visual(&q, &answer(&["a"])));
    assert!(!evaluate_visual(&q, &answer(&["a", "b", "c"])));
    assert!(!evaluate_visual(&q, &answer(&["b"])));
    assert!(!evaluate_visual(&q, &VisualAnswer::Empty));
}

#[test]
fn test_pie_numeric_answer_is_empty_selection() {
    let q = pie_question();
    assert!(!evaluate_visual(&q, &VisualAnswer::Numeric(1.0)));

    // With nothing marked correct, an empty selection is the right answer
    let VisualQuestion::Pie(mut pie) = q else { unreachable!() };
    pie.segments.iter_mut().for_each(|s| s.correct = false);
    let q = VisualQuestion::Pie(pie);
    assert!(evaluate_visual(&q, &VisualAnswer::Empty));
    assert!(evaluate_visual(&q, &VisualAnswer::Numeric(1.0)));
}

#[test]
fn test_grid_pattern_mode() {
    let q = VisualQuestion::Grid(GridQuestion::pattern(3, 3, &["r0c0", "r0c1"]));
    assert!(evaluate_visual(&q, &answer(&["r0c1", "r0c0"])));
    assert!(!evaluate_visual(&q, &answer(&["r0c0"])));
    assert!(!evaluate_visual(&q, &answer(&["r0c0", "r0c1", "r2c2"])));
}

#[test]
fn test_grid_count_mode() {
    let q = VisualQuestion::Grid(GridQuestion::count(3, 3, 2));
    assert!(evaluate_visual(&q, &answer(&["r1c1", "r2c2"])));
    assert!(evaluate_visual(&q, &answer(&["r0c0", "r0c2"])));
    assert!(!evaluate_visual(&q, &answer(&["r1c1"])));
    assert!(!evaluate_visual(&q, &answer(&["r0c0", "r0c1", "r0c2"])));
}

#[test]
fn test_grid_count_zero() {
    let q = VisualQuestion::Grid(GridQuestion::count(3, 3, 0));
    assert!(evaluate_visual(&q, &answer(&[])));
    assert!(evaluate_visual(&q, &VisualAnswer::Empty));
    assert!(!evaluate_visual(&q, &answer(&["r0c0"])));
}

#[test]
fn test_shape_select() {
    let item = |id: &str, correct: bool| ShapeItem {
        id: id.into(),
        label: None,
        correct,
        shape: Shape::Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 },
    };
    let q = VisualQuestion::ShapeSelect(ShapeSelectQuestion {
        shapes: vec![item("s1", true), item("s2", false), item("s3", true)],
        multi: true,
    });
    assert!(evaluate_visual(&q, &answer(&["s3", "s1"])));
    assert!(!evaluate_visual(&q, &answer(&["s1"])));
    assert!(!evaluate_visual(&q, &answer(&["s1", "s2", "s3"])));
}

#[test]
fn test_line_relation_uses_declared_relations() {
    let pair = |id: &str, relation: Option<Relation>| LinePair {
        id: id.into(),
        label: None,
        a: LineSegment::new(0.0, 0.0, 10.0, 0.0),
        b: LineSegment::new(0.0, 5.0, 10.0, 5.0),
        relation,
    };
    let q = VisualQuestion::LineRelation(LineRelationQuestion {
        target: Relation::Perpendicular,
        pairs: vec![
            pair("p1", Some(Relation::Perpendicular)),
            pair("p2", Some(Relation::Parallel)),
            pair("p3", None),
            pair("p4", Some(Relation::Perpendicular)),
        ],
        tolerance: None,
    });
    assert!(evaluate_visual(&q, &answer(&["p1", "p4"])));
    assert!(!evaluate_visual(&q, &answer(&["p1", "p3", "p4"])));
    assert!(!evaluate_visual(&q, &answer(&["p2"])));
    assert_eq!(
        correct_selection(&q),
        Some(["p1".to_string(), "p4".to_string()].into_iter().collect())
    );
}

#[test]
fn test_unknown_subtype_is_never_correct() {
    assert!(!evaluate_visual(&VisualQuestion::Unknown, &answer(&[])));
    assert!(!evaluate_visual(&VisualQuestion::Unknown, &VisualAnswer::Numeric(0.0)));
    assert_eq!(correct_selection(&VisualQuestion::Unknown), None);
}

#[test]
fn test_evaluation_is_idempotent() {
    let q = pie_question();
    let a = answer(&["a", "c"]);
    let before = q.clone();
    let first = evaluate_visual(&q, &a);
    let second = evaluate_visual(&q, &a);
    assert_eq!(first, second);
    assert_eq!(q, before);
}

#[test]
fn test_sets_equal() {
    let a: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
    let b: BTreeSet<i32> = [3, 2, 1].into_iter().collect();
    let c: BTreeSet<i32> = [1, 2].into_iter().collect();
    assert!(sets_equal(&a, &b));
    assert!(!sets_equal(&a, &c));
    assert!(!sets_equal(&c, &a));
    assert!(sets_equal(&BTreeSet::<i32>::new(), &BTreeSet::new()));
}
