use crate::geometry::{classify_segments, pie_slices, LineSegment, PieSlice, Relation, SegmentPair, Shape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::QuestionError;

/// Option id standing for the base angle in multi-select angle questions.
pub const BASE_OPTION_ID: &str = "base";

/// Largest number of rows or columns a grid may have.
pub const MAX_GRID_SIZE: u32 = 10;

/// Tolerance (degrees) for classifying line pairs when a question sets none.
pub const DEFAULT_RELATION_TOLERANCE: f64 = 3.0;

/// A visual question, tagged by `subtype` in its JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "subtype", rename_all = "snake_case")]
pub enum VisualQuestion {
    Pie(PieQuestion),
    Grid(GridQuestion),
    ShapeSelect(ShapeSelectQuestion),
    LineRelation(LineRelationQuestion),
    Angle(AngleQuestion),
    /// Any subtype this build does not know about.
    #[serde(other)]
    Unknown,
}

impl VisualQuestion {
    /// The `subtype` tag as it appears in JSON.
    pub fn subtype(&self) -> &'static str {
        match self {
            Self::Pie(_) => "pie",
            Self::Grid(_) => "grid",
            Self::ShapeSelect(_) => "shape_select",
            Self::LineRelation(_) => "line_relation",
            Self::Angle(_) => "angle",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the player lets the student pick more than one option.
    pub fn is_multi(&self) -> bool {
        match self {
            Self::Pie(q) => q.multi,
            Self::Grid(q) => q.multi,
            Self::ShapeSelect(q) => q.multi,
            Self::LineRelation(_) => true,
            Self::Angle(q) => q.multi,
            Self::Unknown => false,
        }
    }
}

// =============================================================================
// Pie
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSegment {
    pub id: String,
    /// Fraction of the full circle.
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieVariant {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub segments: Vec<PieSegment>,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieQuestion {
    pub segments: Vec<PieSegment>,
    #[serde(default)]
    pub multi: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<PieVariant>,
}

impl PieQuestion {
    pub fn values(&self) -> Vec<f64> {
        self.segments.iter().map(|s| s.value).collect()
    }

    /// Slice angles for drawing the segments in order.
    pub fn slices(&self) -> Vec<PieSlice> {
        pie_slices(&self.values())
    }
}

// =============================================================================
// Grid
// =============================================================================

/// How a grid selection is scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridScoring {
    /// The selection must be exactly these cells.
    Pattern(BTreeSet<String>),
    /// Only the number of selected cells matters.
    Count(usize),
}

/// A `rows × cols` grid of toggleable cells.
///
/// In JSON the scoring mode is carried by either `correctCells` or
/// `requiredCount`. A grid with neither is rejected when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGridQuestion", into = "RawGridQuestion")]
pub struct GridQuestion {
    pub rows: u32,
    pub cols: u32,
    pub multi: bool,
    pub scoring: GridScoring,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGridQuestion {
    rows: u32,
    cols: u32,
    #[serde(default)]
    multi: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    correct_cells: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    required_count: Option<usize>,
}

impl TryFrom<RawGridQuestion> for GridQuestion {
    type Error = QuestionError;

    fn try_from(raw: RawGridQuestion) -> Result<Self, Self::Error> {
        let scoring = match (raw.correct_cells, raw.required_count) {
            (Some(cells), _) if !cells.is_empty() => GridScoring::Pattern(cells.into_iter().collect()),
            (_, Some(count)) => GridScoring::Count(count),
            _ => return Err(QuestionError::UnanswerableGrid),
        };
        Ok(Self { rows: raw.rows, cols: raw.cols, multi: raw.multi, scoring })
    }
}

impl From<GridQuestion> for RawGridQuestion {
    fn from(grid: GridQuestion) -> Self {
        let (correct_cells, required_count) = match grid.scoring {
            GridScoring::Pattern(cells) => (Some(cells.into_iter().collect()), None),
            GridScoring::Count(count) => (None, Some(count)),
        };
        Self { rows: grid.rows, cols: grid.cols, multi: grid.multi, correct_cells, required_count }
    }
}

impl GridQuestion {
    pub fn pattern(rows: u32, cols: u32, cells: &[&str]) -> Self {
        Self {
            rows,
            cols,
            multi: true,
            scoring: GridScoring::Pattern(cells.iter().map(|c| c.to_string()).collect()),
        }
    }

    pub fn count(rows: u32, cols: u32, required: usize) -> Self {
        Self { rows, cols, multi: true, scoring: GridScoring::Count(required) }
    }

    /// Id of the cell at (row, col), e.g. `r2c3`.
    pub fn cell_id(row: u32, col: u32) -> String {
        format!("r{}c{}", row, col)
    }

    /// Every cell id in row-major order.
    pub fn cell_ids(&self) -> Vec<String> {
        (0..self.rows)
            .flat_map(|r| (0..self.cols).map(move |c| Self::cell_id(r, c)))
            .collect()
    }

    pub fn contains_cell(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }
}

/// Parse a cell id of the form `r{row}c{col}`.
pub fn parse_cell_id(id: &str) -> Result<(u32, u32), QuestionError> {
    let invalid = || QuestionError::InvalidCellId(id.to_string());
    let rest = id.strip_prefix('r').ok_or_else(invalid)?;
    let (row, col) = rest.split_once('c').ok_or_else(invalid)?;
    let row = row.parse::<u32>().map_err(|_| invalid())?;
    let col = col.parse::<u32>().map_err(|_| invalid())?;
    Ok((row, col))
}

// =============================================================================
// Shape select
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub correct: bool,
    #[serde(flatten)]
    pub shape: Shape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeSelectQuestion {
    pub shapes: Vec<ShapeItem>,
    #[serde(default)]
    pub multi: bool,
}

impl ShapeSelectQuestion {
    /// Topmost shape under a sandbox point (later shapes draw on top).
    pub fn shape_at(&self, point: [f64; 2]) -> Option<&ShapeItem> {
        self.shapes.iter().rev().find(|item| item.shape.contains(point))
    }
}

// =============================================================================
// Line relation
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePair {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub a: LineSegment,
    pub b: LineSegment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
}

impl SegmentPair for LinePair {
    fn segments(&self) -> (&LineSegment, &LineSegment) {
        (&self.a, &self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRelationQuestion {
    pub target: Relation,
    pub pairs: Vec<LinePair>,
    /// Tolerance in degrees used when auto-classifying pairs while authoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
}

impl LineRelationQuestion {
    /// Fill in `relation` for pairs that were left unclassified. Pairs that
    /// already carry a relation are left alone. Returns how many were filled.
    pub fn classify_missing(&mut self, tolerance: f64) -> usize {
        let tolerance = self.tolerance.unwrap_or(tolerance);
        let mut filled = 0;
        for pair in self.pairs.iter_mut().filter(|p| p.relation.is_none()) {
            pair.relation = classify_segments(&pair.a, &pair.b, tolerance);
            if pair.relation.is_some() {
                filled += 1;
            }
        }
        filled
    }
}

// =============================================================================
// Angle
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleVariant {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub target_deg: f64,
    pub tolerance_deg: f64,
    #[serde(default)]
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleQuestion {
    pub target_deg: f64,
    pub tolerance_deg: f64,
    #[serde(default)]
    pub multi: bool,
    #[serde(default)]
    pub base_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<AngleVariant>,
}

impl AngleQuestion {
    pub fn single(target_deg: f64, tolerance_deg: f64) -> Self {
        Self {
            target_deg,
            tolerance_deg,
            multi: false,
            base_correct: false,
            base_label: None,
            variants: Vec::new(),
        }
    }

    /// Every (target, tolerance) an estimate is checked against, base first.
    pub fn candidates(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        std::iter::once((self.target_deg, self.tolerance_deg))
            .chain(self.variants.iter().map(|v| (v.target_deg, v.tolerance_deg)))
    }
}
