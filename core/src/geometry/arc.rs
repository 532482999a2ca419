//! Pie chart slice geometry for the pie question player.
//!
//! Pie angles are measured clockwise from 12 o'clock, in degrees, which
//! matches how slices are laid out on screen.

use super::{EPSILON, Point2};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Angular extent of one pie segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub start_deg: f64,
    pub end_deg: f64,
}

impl PieSlice {
    pub fn sweep_deg(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// Clock angle through the middle of the slice, used to place labels.
    pub fn mid_deg(&self) -> f64 {
        (self.start_deg + self.end_deg) / 2.0
    }
}

/// Lay out consecutive slices for fractional segment values.
///
/// Values are used as-is (a full circle is 1.0); negative or non-finite
/// values produce an empty slice.
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let mut cursor = 0.0;
    values
        .iter()
        .map(|value| {
            let fraction = if value.is_finite() { value.max(0.0) } else { 0.0 };
            let start_deg = cursor;
            cursor += fraction * 360.0;
            PieSlice { start_deg, end_deg: cursor }
        })
        .collect()
}

/// Point on a circle at a clock angle (clockwise from 12 o'clock).
pub fn clock_point(center: [f64; 2], radius: f64, clock_deg: f64) -> [f64; 2] {
    let theta = clock_deg.to_radians();
    let p = Point2::new(center[0] + radius * theta.sin(), center[1] - radius * theta.cos());
    [p.x, p.y]
}

fn num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// SVG path data for a pie slice.
///
/// Empty (or inverted) slices yield an empty path. A slice covering the
/// whole circle is drawn as two half arcs since a single SVG arc cannot
/// start and end on the same point.
pub fn pie_slice_path(center: [f64; 2], radius: f64, start_deg: f64, end_deg: f64) -> String {
    let sweep = end_deg - start_deg;
    if sweep.is_nan() || sweep <= EPSILON || radius.is_nan() || radius <= 0.0 {
        return String::new();
    }

    let r = num(radius);
    let mut d = String::new();

    if sweep >= 360.0 - EPSILON {
        let top = clock_point(center, radius, 0.0);
        let bottom = clock_point(center, radius, 180.0);
        let _ = write!(
            d,
            "M {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {} Z",
            num(top[0]),
            num(top[1]),
            num(bottom[0]),
            num(bottom[1]),
            num(top[0]),
            num(top[1]),
        );
        return d;
    }

    let start = clock_point(center, radius, start_deg);
    let end = clock_point(center, radius, end_deg);
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    let _ = write!(
        d,
        "M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z",
        num(center[0]),
        num(center[1]),
        num(start[0]),
        num(start[1]),
        num(end[0]),
        num(end[1]),
    );
    d
}
