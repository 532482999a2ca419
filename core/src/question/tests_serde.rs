use super::*;
use crate::geometry::{Relation, Shape};
use serde_json::json;

#[test]
fn test_pie_from_question_bank_json() {
    let json = json!({
        "subtype": "pie",
        "multi": true,
        "segments": [
            {"id": "a", "value": 0.5, "label": "Half", "correct": true},
            {"id": "b", "value": 0.25},
            {"id": "c", "value": 0.25, "correct": true}
        ]
    });

    let question = VisualQuestion::from_json(&json).expect("pie should parse");
    let VisualQuestion::Pie(pie) = &question else {
        panic!("expected pie, got {:?}", question);
    };
    assert!(pie.multi);
    assert_eq!(pie.segments.len(), 3);
    assert_eq!(pie.segments[0].label.as_deref(), Some("Half"));
    assert!(!pie.segments[1].correct);
    assert!(pie.variants.is_empty());
    assert_eq!(question.subtype(), "pie");
}

#[test]
fn test_pie_slices_from_segment_values() {
    let question = VisualQuestion::from_json_str(
        r#"{"subtype":"pie","segments":[{"id":"a","value":0.25},{"id":"b","value":0.75}]}"#,
    )
    .unwrap();
    assert!(!question.is_multi());
    let VisualQuestion::Pie(pie) = question else {
        panic!("expected pie");
    };
    assert_eq!(pie.values(), vec![0.25, 0.75]);

    let slices = pie.slices();
    assert_eq!(slices.len(), 2);
    assert!((slices[0].end_deg - 90.0).abs() < 1e-9);
    assert!((slices[1].start_deg - 90.0).abs() < 1e-9);
    assert!((slices[1].end_deg - 360.0).abs() < 1e-9);
}

#[test]
fn test_from_json_str_rejects_bad_text() {
    assert!(matches!(VisualQuestion::from_json_str("{not json"), Err(QuestionError::Json(_))));
    let err = VisualQuestion::from_json_str(r#"{"subtype":"grid","rows":2,"cols":2}"#).unwrap_err();
    assert!(err.to_string().contains("neither correctCells nor requiredCount"));
}

#[test]
fn test_grid_pattern_mode_wins_over_count() {
    let json = json!({
        "subtype": "grid", "rows": 3, "cols": 3,
        "correctCells": ["r0c0", "r0c1"], "requiredCount": 5
    });
    let VisualQuestion::Grid(grid) = VisualQuestion::from_json(&json).unwrap() else {
        panic!("expected grid");
    };
    assert_eq!(
        grid.scoring,
        GridScoring::Pattern(["r0c0".to_string(), "r0c1".to_string()].into_iter().collect())
    );
}

#[test]
fn test_grid_empty_cells_fall_back_to_count() {
    let json = json!({
        "subtype": "grid", "rows": 2, "cols": 2,
        "correctCells": [], "requiredCount": 0
    });
    let VisualQuestion::Grid(grid) = VisualQuestion::from_json(&json).unwrap() else {
        panic!("expected grid");
    };
    assert_eq!(grid.scoring, GridScoring::Count(0));
}

#[test]
fn test_grid_without_scoring_is_rejected() {
    let json = json!({"subtype": "grid", "rows": 3, "cols": 3, "multi": true});
    let err = VisualQuestion::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("neither correctCells nor requiredCount"), "{}", err);

    let json = json!({"subtype": "grid", "rows": 3, "cols": 3, "correctCells": []});
    assert!(VisualQuestion::from_json(&json).is_err());
}

#[test]
fn test_grid_serializes_back_to_optional_fields() {
    let grid = VisualQuestion::Grid(GridQuestion::count(4, 4, 3));
    let value = serde_json::to_value(&grid).unwrap();
    assert_eq!(value["subtype"], "grid");
    assert_eq!(value["requiredCount"], 3);
    assert!(value.get("correctCells").is_none());

    let back = VisualQuestion::from_json(&value).unwrap();
    assert_eq!(back, grid);
}

#[test]
fn test_shape_select_flattens_geometry() {
    let json = json!({
        "subtype": "shape_select",
        "shapes": [
            {"id": "sq", "kind": "rect", "x": 10, "y": 10, "width": 20, "height": 20, "correct": true},
            {"id": "ci", "kind": "circle", "cx": 70, "cy": 30, "r": 10},
            {"id": "tr", "kind": "triangle", "points": [[10, 90], [30, 60], [50, 90]]}
        ]
    });
    let VisualQuestion::ShapeSelect(q) = VisualQuestion::from_json(&json).unwrap() else {
        panic!("expected shape_select");
    };
    assert_eq!(q.shapes[1].shape, Shape::Circle { cx: 70.0, cy: 30.0, r: 10.0 });
    assert_eq!(q.shape_at([15.0, 15.0]).map(|s| s.id.as_str()), Some("sq"));
    assert_eq!(q.shape_at([30.0, 80.0]).map(|s| s.id.as_str()), Some("tr"));
    assert!(q.shape_at([90.0, 90.0]).is_none());
}

#[test]
fn test_line_relation_parses_and_classifies_missing() {
    let json = json!({
        "subtype": "line_relation",
        "target": "perpendicular",
        "pairs": [
            {"id": "p1", "a": {"x1": 0, "y1": 0, "x2": 10, "y2": 0},
                         "b": {"x1": 0, "y1": 5, "x2": 10, "y2": 5}, "relation": "parallel"},
            {"id": "p2", "a": {"x1": 0, "y1": 0, "x2": 10, "y2": 0},
                         "b": {"x1": 5, "y1": 0, "x2": 5, "y2": 10}},
            {"id": "p3", "a": {"x1": 0, "y1": 0, "x2": 10, "y2": 0},
                         "b": {"x1": 0, "y1": 0, "x2": 10, "y2": 10}}
        ]
    });
    let VisualQuestion::LineRelation(mut q) = VisualQuestion::from_json(&json).unwrap() else {
        panic!("expected line_relation");
    };
    assert_eq!(q.target, Relation::Perpendicular);
    assert_eq!(q.pairs[1].relation, None);

    let filled = q.classify_missing(DEFAULT_RELATION_TOLERANCE);
    assert_eq!(filled, 1);
    assert_eq!(q.pairs[0].relation, Some(Relation::Parallel));
    assert_eq!(q.pairs[1].relation, Some(Relation::Perpendicular));
    assert_eq!(q.pairs[2].relation, None);
}

#[test]
fn test_angle_with_variants() {
    let json = json!({
        "subtype": "angle",
        "targetDeg": 60, "toleranceDeg": 2,
        "multi": true, "baseCorrect": true,
        "variants": [
            {"id": "v1", "targetDeg": 120, "toleranceDeg": 3, "correct": false, "label": "obtuse"}
        ]
    });
    let VisualQuestion::Angle(q) = VisualQuestion::from_json(&json).unwrap() else {
        panic!("expected angle");
    };
    assert!(q.multi && q.base_correct);
    let candidates: Vec<_> = q.candidates().collect();
    assert_eq!(candidates, vec![(60.0, 2.0), (120.0, 3.0)]);
}

#[test]
fn test_unknown_subtype_is_captured() {
    let json = json!({"subtype": "number_line", "min": 0, "max": 10});
    let question = VisualQuestion::from_json(&json).unwrap();
    assert_eq!(question, VisualQuestion::Unknown);
    assert_eq!(question.subtype(), "unknown");
}

#[test]
fn test_missing_subtype_is_an_error() {
    let json = json!({"segments": []});
    assert!(matches!(VisualQuestion::from_json(&json), Err(QuestionError::Json(_))));
}

#[test]
fn test_cell_ids() {
    let grid = GridQuestion::count(2, 3, 1);
    assert_eq!(grid.cell_ids(), vec!["r0c0", "r0c1", "r0c2", "r1c0", "r1c1", "r1c2"]);
    assert_eq!(parse_cell_id("r1c2").unwrap(), (1, 2));
    assert!(parse_cell_id("c1r2").is_err());
    assert!(parse_cell_id("r1").is_err());
}
