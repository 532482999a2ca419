//! Authoring checks.
//!
//! Evaluation is deliberately forgiving: an inconsistent question simply
//! never grades as correct. These checks let editors and import tools warn
//! about such questions before a student ever sees them.

use super::types::*;
use crate::geometry::utils_2d::polygon_signed_area;
use crate::geometry::{classify_relation, Shape, EPSILON, SANDBOX_MAX, SANDBOX_MIN};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Allowed slack when checking that pie values add up to a full circle.
pub const PIE_SUM_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The question grades, but probably not the way the author meant.
    Warning,
    /// The question cannot be graded meaningfully.
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// Dotted location of the problem, e.g. `segments[2].id`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{} at {}: {}", level, self.path, self.message)
    }
}

#[derive(Default)]
struct Report {
    issues: Vec<ValidationIssue>,
}

impl Report {
    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            severity: Severity::Warning,
            path: path.into(),
            message: message.into(),
        });
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            severity: Severity::Error,
            path: path.into(),
            message: message.into(),
        });
    }

    /// Flag every id that was already seen under `path`.
    fn unique_ids<'a>(&mut self, path: &str, ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for (i, id) in ids.enumerate() {
            if !seen.insert(id) {
                self.error(format!("{}[{}].id", path, i), format!("duplicate id '{}'", id));
            }
        }
    }
}

impl VisualQuestion {
    /// Run the authoring checks for this question.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut report = Report::default();
        match self {
            Self::Pie(q) => validate_pie(q, &mut report),
            Self::Grid(q) => validate_grid(q, &mut report),
            Self::ShapeSelect(q) => validate_shapes(q, &mut report),
            Self::LineRelation(q) => validate_lines(q, &mut report),
            Self::Angle(q) => validate_angle(q, &mut report),
            Self::Unknown => report.error("subtype", "unknown question subtype"),
        }
        report.issues
    }

    /// True when no check reports an [`Severity::Error`].
    pub fn is_gradable(&self) -> bool {
        self.validate().iter().all(|issue| issue.severity != Severity::Error)
    }
}

fn validate_segments(path: &str, segments: &[PieSegment], report: &mut Report) {
    if segments.is_empty() {
        report.error(path, "pie has no segments");
        return;
    }
    report.unique_ids(path, segments.iter().map(|s| s.id.as_str()));

    for (i, segment) in segments.iter().enumerate() {
        if !segment.value.is_finite() || segment.value < 0.0 {
            report.error(format!("{}[{}].value", path, i), "segment value must be a non-negative number");
        }
    }

    let total: f64 = segments.iter().map(|s| s.value).sum();
    if (total - 1.0).abs() > PIE_SUM_TOLERANCE {
        report.warn(path, format!("segment values sum to {:.3}, expected 1", total));
    }
}

fn validate_pie(q: &PieQuestion, report: &mut Report) {
    validate_segments("segments", &q.segments, report);

    let correct = q.segments.iter().filter(|s| s.correct).count();
    if correct == 0 {
        report.warn("segments", "no segment is marked correct; only an empty selection will pass");
    } else if correct > 1 && !q.multi {
        report.warn("multi", "several segments are correct but multi-select is off");
    }

    report.unique_ids("variants", q.variants.iter().map(|v| v.id.as_str()));
    for (i, variant) in q.variants.iter().enumerate() {
        validate_segments(&format!("variants[{}].segments", i), &variant.segments, report);
    }
}

fn validate_grid(q: &GridQuestion, report: &mut Report) {
    for (name, size) in [("rows", q.rows), ("cols", q.cols)] {
        if size == 0 || size > MAX_GRID_SIZE {
            report.error(name, format!("{} must be between 1 and {}, got {}", name, MAX_GRID_SIZE, size));
        }
    }

    match &q.scoring {
        GridScoring::Pattern(cells) => {
            for cell in cells {
                match parse_cell_id(cell) {
                    Ok((row, col)) if q.contains_cell(row, col) => {}
                    Ok(_) => report.error("correctCells", format!("cell '{}' is outside the grid", cell)),
                    Err(e) => report.error("correctCells", e.to_string()),
                }
            }
            if cells.len() > 1 && !q.multi {
                report.warn("multi", "several cells are correct but multi-select is off");
            }
        }
        GridScoring::Count(count) => {
            let capacity = q.rows as usize * q.cols as usize;
            if *count > capacity {
                report.error("requiredCount", format!("requires {} cells but the grid has {}", count, capacity));
            }
            if *count > 1 && !q.multi {
                report.warn("multi", "count above 1 but multi-select is off");
            }
        }
    }
}

fn validate_shapes(q: &ShapeSelectQuestion, report: &mut Report) {
    if q.shapes.is_empty() {
        report.error("shapes", "no shapes to select from");
        return;
    }
    report.unique_ids("shapes", q.shapes.iter().map(|s| s.id.as_str()));

    for (i, item) in q.shapes.iter().enumerate() {
        let path = format!("shapes[{}]", i);
        if !item.shape.bounds().within(SANDBOX_MIN, SANDBOX_MAX) {
            report.warn(&path, "shape extends outside the 0-100 canvas");
        }
        let degenerate = match &item.shape {
            Shape::Rect { width, height, .. } => *width <= 0.0 || *height <= 0.0,
            Shape::Circle { r, .. } => *r <= 0.0,
            Shape::Triangle { points } => polygon_signed_area(points).abs() < EPSILON,
            Shape::Polygon { points } => polygon_signed_area(points).abs() < EPSILON,
        };
        if degenerate {
            report.error(&path, "shape has no area and cannot be clicked");
        }
    }

    let correct = q.shapes.iter().filter(|s| s.correct).count();
    if correct == 0 {
        report.warn("shapes", "no shape is marked correct; only an empty selection will pass");
    } else if correct > 1 && !q.multi {
        report.warn("multi", "several shapes are correct but multi-select is off");
    }
}

fn validate_lines(q: &LineRelationQuestion, report: &mut Report) {
    if q.pairs.is_empty() {
        report.error("pairs", "no line pairs to classify");
        return;
    }
    report.unique_ids("pairs", q.pairs.iter().map(|p| p.id.as_str()));

    let tolerance = q.tolerance.unwrap_or(DEFAULT_RELATION_TOLERANCE);
    for (i, pair) in q.pairs.iter().enumerate() {
        let path = format!("pairs[{}].relation", i);
        let measured = classify_relation(pair, tolerance);
        match (pair.relation, measured) {
            (None, _) => report.warn(&path, "pair has no relation and never counts as correct"),
            (Some(declared), Some(actual)) if declared != actual => {
                report.warn(&path, format!("declared {} but the segments look {}", declared, actual))
            }
            (Some(declared), None) => {
                report.warn(&path, format!("declared {} but the segments are neither parallel nor perpendicular", declared))
            }
            _ => {}
        }
    }

    if !q.pairs.iter().any(|p| p.relation == Some(q.target)) {
        report.warn("target", format!("no pair is {}; only an empty selection will pass", q.target));
    }
}

fn validate_tolerance(path: &str, tolerance: f64, report: &mut Report) {
    if !tolerance.is_finite() || tolerance < 0.0 {
        report.error(path, "tolerance must be a non-negative number of degrees");
    }
}

fn validate_angle(q: &AngleQuestion, report: &mut Report) {
    validate_tolerance("toleranceDeg", q.tolerance_deg, report);
    for (i, variant) in q.variants.iter().enumerate() {
        validate_tolerance(&format!("variants[{}].toleranceDeg", i), variant.tolerance_deg, report);
    }

    if q.multi {
        let ids = std::iter::once(BASE_OPTION_ID).chain(q.variants.iter().map(|v| v.id.as_str()));
        report.unique_ids("options", ids);
        if !q.base_correct && !q.variants.iter().any(|v| v.correct) {
            report.warn("variants", "no angle option is marked correct; only an empty selection will pass");
        }
    }
}
