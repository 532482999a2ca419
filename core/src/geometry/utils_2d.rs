//! 2D geometry utilities for the visual question editors and players.
//!
//! This module provides pure 2D geometry functions that are reused across
//! the codebase for hit-testing, distance queries and shape placement.
//! Points are plain `[x, y]` arrays in the normalized sandbox space.

use super::EPSILON;

// =============================================================================
// Point Operations
// =============================================================================

/// Check if two 2D points are approximately equal within EPSILON.
#[inline]
pub fn points_equal(p1: [f64; 2], p2: [f64; 2]) -> bool {
    (p1[0] - p2[0]).abs() < EPSILON && (p1[1] - p2[1]).abs() < EPSILON
}

/// Compute squared distance between two 2D points.
#[inline]
pub fn distance_squared(p1: [f64; 2], p2: [f64; 2]) -> f64 {
    let dx = p2[0] - p1[0];
    let dy = p2[1] - p1[1];
    dx * dx + dy * dy
}

/// Compute distance between two 2D points.
#[inline]
pub fn distance(p1: [f64; 2], p2: [f64; 2]) -> f64 {
    distance_squared(p1, p2).sqrt()
}

/// Linear interpolation between two 2D points.
#[inline]
pub fn lerp(p1: [f64; 2], p2: [f64; 2], t: f64) -> [f64; 2] {
    [
        p1[0] + t * (p2[0] - p1[0]),
        p1[1] + t * (p2[1] - p1[1]),
    ]
}

/// Midpoint between two 2D points.
#[inline]
pub fn midpoint(p1: [f64; 2], p2: [f64; 2]) -> [f64; 2] {
    lerp(p1, p2, 0.5)
}

// =============================================================================
// Segment Operations
// =============================================================================

/// Find parameter t where point projects onto the line through a segment.
/// Returns t such that point ≈ start + t * (end - start).
/// A zero-length segment projects everything onto its start (t = 0).
pub fn project_point_on_line(start: [f64; 2], end: [f64; 2], point: [f64; 2]) -> f64 {
    let dx = end[0] - start[0];
    let dy = end[1] - start[1];
    let len_sq = dx * dx + dy * dy;

    if len_sq < EPSILON * EPSILON {
        return 0.0;
    }

    let px = point[0] - start[0];
    let py = point[1] - start[1];

    (px * dx + py * dy) / len_sq
}

/// Compute closest point on a finite segment to given point.
pub fn closest_point_on_segment(start: [f64; 2], end: [f64; 2], point: [f64; 2]) -> [f64; 2] {
    let t = project_point_on_line(start, end, point).clamp(0.0, 1.0);
    lerp(start, end, t)
}

/// Distance from a point to a finite segment.
///
/// Outside the segment's span this is the distance to the nearer endpoint,
/// and a zero-length segment degrades to point-to-point distance.
pub fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let point = [px, py];
    distance(point, closest_point_on_segment([x1, y1], [x2, y2], point))
}

// =============================================================================
// Polygon Operations
// =============================================================================

/// Consecutive vertex pairs around a closed ring, last vertex back to first.
fn edges(vertices: &[[f64; 2]]) -> impl Iterator<Item = ([f64; 2], [f64; 2])> + '_ {
    vertices
        .iter()
        .copied()
        .zip(vertices.iter().copied().cycle().skip(1))
}

/// Signed area by the shoelace formula. Counter-clockwise rings (in y-up
/// terms) are positive. Fewer than three vertices have no area.
pub fn polygon_signed_area(vertices: &[[f64; 2]]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    edges(vertices).map(|(a, b)| a[0] * b[1] - b[0] * a[1]).sum::<f64>() / 2.0
}

/// Area centroid of a polygon. Degenerate rings fall back to the vertex mean.
pub fn polygon_centroid(vertices: &[[f64; 2]]) -> [f64; 2] {
    match vertices.len() {
        0 => return [0.0, 0.0],
        1 => return vertices[0],
        2 => return midpoint(vertices[0], vertices[1]),
        _ => {}
    }

    let area = polygon_signed_area(vertices);
    if area.abs() <= EPSILON {
        let n = vertices.len() as f64;
        let (sx, sy) = vertices.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p[0], sy + p[1]));
        return [sx / n, sy / n];
    }

    let (cx, cy) = edges(vertices).fold((0.0, 0.0), |(cx, cy), (a, b)| {
        let cross = a[0] * b[1] - b[0] * a[1];
        (cx + (a[0] + b[0]) * cross, cy + (a[1] + b[1]) * cross)
    });
    [cx / (6.0 * area), cy / (6.0 * area)]
}

/// Winding-number containment test. Handles concave rings in either
/// orientation; points exactly on an edge may land either way.
pub fn point_in_polygon(point: [f64; 2], polygon: &[[f64; 2]]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let side = |a: [f64; 2], b: [f64; 2]| {
        (b[0] - a[0]) * (point[1] - a[1]) - (b[1] - a[1]) * (point[0] - a[0])
    };

    let winding: i32 = edges(polygon)
        .map(|(a, b)| {
            if a[1] <= point[1] && b[1] > point[1] && side(a, b) > 0.0 {
                1
            } else if a[1] > point[1] && b[1] <= point[1] && side(a, b) < 0.0 {
                -1
            } else {
                0
            }
        })
        .sum();

    winding != 0
}

// =============================================================================
// Tests
// =============================================================================
