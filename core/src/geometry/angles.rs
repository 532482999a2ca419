//! Angle helpers in degrees.
//!
//! Angles follow the math convention (counter-clockwise from +x, y up).
//! Inputs in screen coordinates are flipped on the way in via
//! [`LineSegment::direction`].

use super::primitives::{LineSegment, Relation};
use super::{Rotation2, Vector2};

/// Full turn in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Map any degree value into [0, 360).
///
/// Non-finite input maps to 0.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    // Tiny negatives land on 0, never on 360
    ((angle % FULL_TURN_DEG) + FULL_TURN_DEG) % FULL_TURN_DEG
}

/// Smallest absolute angular distance between two angles, in [0, 180].
pub fn angle_difference_deg(a: f64, b: f64) -> f64 {
    let mut diff = normalize_angle(a) - normalize_angle(b);
    if diff > 180.0 {
        diff -= FULL_TURN_DEG;
    } else if diff <= -180.0 {
        diff += FULL_TURN_DEG;
    }
    diff.abs()
}

/// Direction of the segment (x1, y1) → (x2, y2) given in screen
/// coordinates, as a math-convention angle in [0, 360).
///
/// A zero-length segment has angle 0.
pub fn segment_angle_deg(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    vector_angle_deg(&LineSegment::new(x1, y1, x2, y2).direction())
}

fn vector_angle_deg(v: &Vector2) -> f64 {
    normalize_angle(v.y.atan2(v.x).to_degrees())
}

/// Screen-space endpoint of a ray of `length` leaving `origin` at the
/// math-convention angle `angle_deg`. Inverse of [`segment_angle_deg`].
pub fn ray_endpoint(origin: [f64; 2], length: f64, angle_deg: f64) -> [f64; 2] {
    let rotation = Rotation2::new(normalize_angle(angle_deg).to_radians());
    let v = rotation * Vector2::new(length, 0.0);
    [origin[0] + v.x, origin[1] - v.y]
}

/// Classify two segments as parallel or perpendicular within `tolerance`
/// degrees. Parallel is checked first.
pub fn classify_segments(a: &LineSegment, b: &LineSegment, tolerance: f64) -> Option<Relation> {
    let angle_a = vector_angle_deg(&a.direction());
    let angle_b = vector_angle_deg(&b.direction());
    let diff = angle_difference_deg(angle_a, angle_b);

    if diff <= tolerance || (180.0 - diff) <= tolerance {
        Some(Relation::Parallel)
    } else if (diff - 90.0).abs() <= tolerance {
        Some(Relation::Perpendicular)
    } else {
        None
    }
}

/// Something holding two segments that can be compared.
pub trait SegmentPair {
    fn segments(&self) -> (&LineSegment, &LineSegment);
}

impl SegmentPair for (LineSegment, LineSegment) {
    fn segments(&self) -> (&LineSegment, &LineSegment) {
        (&self.0, &self.1)
    }
}

/// Classify a pair of segments. See [`classify_segments`].
pub fn classify_relation<P: SegmentPair + ?Sized>(pair: &P, tolerance: f64) -> Option<Relation> {
    let (a, b) = pair.segments();
    classify_segments(a, b, tolerance)
}
