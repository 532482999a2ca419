use super::utils_2d::{distance_squared, point_in_polygon, polygon_centroid};
use super::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A finite segment in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn start(&self) -> Point2 {
        Point2::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point2 {
        Point2::new(self.x2, self.y2)
    }

    /// Direction in math convention: screen y is flipped so that positive
    /// y points up.
    pub fn direction(&self) -> Vector2 {
        Vector2::new(self.x2 - self.x1, -(self.y2 - self.y1))
    }

    pub fn length(&self) -> f64 {
        (self.end() - self.start()).norm()
    }
}

/// Relation between two segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Parallel,
    Perpendicular,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parallel => write!(f, "parallel"),
            Self::Perpendicular => write!(f, "perpendicular"),
        }
    }
}

/// Authored shape geometry in the 0–100 sandbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Circle { cx: f64, cy: f64, r: f64 },
    Triangle { points: [[f64; 2]; 3] },
    Polygon { points: Vec<[f64; 2]> },
}

impl Shape {
    /// Hit-test a sandbox point against the shape (boundary inclusive for
    /// rects and circles).
    pub fn contains(&self, point: [f64; 2]) -> bool {
        match self {
            Shape::Rect { x, y, width, height } => {
                point[0] >= *x && point[0] <= x + width && point[1] >= *y && point[1] <= y + height
            }
            Shape::Circle { cx, cy, r } => distance_squared([*cx, *cy], point) <= r * r,
            Shape::Triangle { points } => point_in_polygon(point, points),
            Shape::Polygon { points } => point_in_polygon(point, points),
        }
    }

    /// Anchor for the shape's label.
    pub fn centroid(&self) -> [f64; 2] {
        match self {
            Shape::Rect { x, y, width, height } => [x + width / 2.0, y + height / 2.0],
            Shape::Circle { cx, cy, .. } => [*cx, *cy],
            Shape::Triangle { points } => polygon_centroid(points),
            Shape::Polygon { points } => polygon_centroid(points),
        }
    }

    pub fn bounds(&self) -> Bounds2 {
        match self {
            Shape::Rect { x, y, width, height } => Bounds2::new([*x, *y], [x + width, y + height]),
            Shape::Circle { cx, cy, r } => Bounds2::new([cx - r, cy - r], [cx + r, cy + r]),
            Shape::Triangle { points } => Bounds2::from_points(points),
            Shape::Polygon { points } => Bounds2::from_points(points),
        }
    }
}

/// Axis-aligned 2D bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Bounds2 {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: [f64::INFINITY, f64::INFINITY],
            max: [f64::NEG_INFINITY, f64::NEG_INFINITY],
        }
    }

    pub fn from_points(points: &[[f64; 2]]) -> Self {
        let mut bounds = Self::empty();
        for p in points {
            bounds.extend(*p);
        }
        bounds
    }

    pub fn extend(&mut self, p: [f64; 2]) {
        self.min[0] = self.min[0].min(p[0]);
        self.min[1] = self.min[1].min(p[1]);
        self.max[0] = self.max[0].max(p[0]);
        self.max[1] = self.max[1].max(p[1]);
    }

    pub fn is_empty(&self) -> bool {
        self.min[0] > self.max[0] || self.min[1] > self.max[1]
    }

    pub fn within(&self, lo: f64, hi: f64) -> bool {
        !self.is_empty() && self.min[0] >= lo && self.min[1] >= lo && self.max[0] <= hi && self.max[1] <= hi
    }
}

/// Bounding rectangle of the SVG element hosting an editor, in client
/// (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}
