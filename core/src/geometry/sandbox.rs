//! Keeping authored geometry inside the normalized 0–100 sandbox.

use super::primitives::{ClientRect, Shape};
use super::{SANDBOX_MAX, SANDBOX_MIN};

/// Smallest width/height a rect can be resized to.
pub const MIN_RECT_SIZE: f64 = 2.0;
/// Smallest radius a circle can be resized to.
pub const MIN_CIRCLE_RADIUS: f64 = 1.0;

const SPAN: f64 = SANDBOX_MAX - SANDBOX_MIN;

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Clamp a single point into the sandbox.
pub fn clamp_point(x: f64, y: f64) -> [f64; 2] {
    [
        finite_or(x, SANDBOX_MIN).clamp(SANDBOX_MIN, SANDBOX_MAX),
        finite_or(y, SANDBOX_MIN).clamp(SANDBOX_MIN, SANDBOX_MAX),
    ]
}

/// Clamp a rect, returned as `[x, y, width, height]`.
///
/// Size is enforced first (at least [`MIN_RECT_SIZE`], at most the whole
/// sandbox), then the position is clamped so the rect fits.
pub fn clamp_rect(x: f64, y: f64, width: f64, height: f64) -> [f64; 4] {
    let width = finite_or(width, MIN_RECT_SIZE).clamp(MIN_RECT_SIZE, SPAN);
    let height = finite_or(height, MIN_RECT_SIZE).clamp(MIN_RECT_SIZE, SPAN);
    let x = finite_or(x, SANDBOX_MIN).clamp(SANDBOX_MIN, SANDBOX_MAX - width);
    let y = finite_or(y, SANDBOX_MIN).clamp(SANDBOX_MIN, SANDBOX_MAX - height);
    [x, y, width, height]
}

/// Clamp a circle, returned as `[cx, cy, r]`.
pub fn clamp_circle(cx: f64, cy: f64, r: f64) -> [f64; 3] {
    let r = finite_or(r, MIN_CIRCLE_RADIUS).clamp(MIN_CIRCLE_RADIUS, SPAN / 2.0);
    let cx = finite_or(cx, SANDBOX_MIN).clamp(SANDBOX_MIN + r, SANDBOX_MAX - r);
    let cy = finite_or(cy, SANDBOX_MIN).clamp(SANDBOX_MIN + r, SANDBOX_MAX - r);
    [cx, cy, r]
}

/// Clamp any authored shape. Triangles and polygons clamp each vertex.
pub fn clamp_shape(shape: &Shape) -> Shape {
    match shape {
        Shape::Rect { x, y, width, height } => {
            let [x, y, width, height] = clamp_rect(*x, *y, *width, *height);
            Shape::Rect { x, y, width, height }
        }
        Shape::Circle { cx, cy, r } => {
            let [cx, cy, r] = clamp_circle(*cx, *cy, *r);
            Shape::Circle { cx, cy, r }
        }
        Shape::Triangle { points } => Shape::Triangle {
            points: (*points).map(|p| clamp_point(p[0], p[1])),
        },
        Shape::Polygon { points } => Shape::Polygon {
            points: points.iter().map(|p| clamp_point(p[0], p[1])).collect(),
        },
    }
}

/// Map a pointer's client coordinates into sandbox coordinates using the
/// bounding rect of the hosting SVG element.
///
/// Without an element (or with a collapsed one) the origin is returned.
/// The result is not clamped, so drags past the edge can be detected.
pub fn svg_point(client: [f64; 2], element: Option<&ClientRect>) -> [f64; 2] {
    let Some(rect) = element else {
        return [0.0, 0.0];
    };
    if rect.width.is_nan() || rect.height.is_nan() || rect.width <= 0.0 || rect.height <= 0.0 {
        return [0.0, 0.0];
    }
    [
        (client[0] - rect.left) / rect.width * SPAN + SANDBOX_MIN,
        (client[1] - rect.top) / rect.height * SPAN + SANDBOX_MIN,
    ]
}
