//! Modifier-driven snapping for pointer interaction in the editors.
//!
//! The step size is picked by the keyboard modifiers held while dragging:
//! shift gives fine control, alt coarse control.

use super::angles::normalize_angle;
use serde::{Deserialize, Serialize};

/// Default coordinate step when no modifier is held.
pub const COORDINATE_STEP: f64 = 5.0;
/// Coordinate step while shift is held.
pub const COORDINATE_STEP_FINE: f64 = 1.0;
/// Coordinate step while alt is held.
pub const COORDINATE_STEP_COARSE: f64 = 15.0;

/// Angle step (degrees) while shift is held.
pub const ANGLE_STEP_FINE: f64 = 5.0;
/// Angle step (degrees) while alt is held.
pub const ANGLE_STEP_COARSE: f64 = 15.0;

/// Modifier keys held during an interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapOptions {
    #[serde(default)]
    pub shift_key: bool,
    #[serde(default)]
    pub alt_key: bool,
}

impl SnapOptions {
    pub fn shift() -> Self {
        Self { shift_key: true, alt_key: false }
    }

    pub fn alt() -> Self {
        Self { shift_key: false, alt_key: true }
    }

    /// Step for linear coordinates. Shift wins over alt.
    pub fn coordinate_step(&self) -> f64 {
        if self.shift_key {
            COORDINATE_STEP_FINE
        } else if self.alt_key {
            COORDINATE_STEP_COARSE
        } else {
            COORDINATE_STEP
        }
    }

    /// Step for angles, `None` when no modifier is held.
    pub fn angle_step(&self) -> Option<f64> {
        if self.shift_key {
            Some(ANGLE_STEP_FINE)
        } else if self.alt_key {
            Some(ANGLE_STEP_COARSE)
        } else {
            None
        }
    }
}

/// Round `value` to the nearest multiple of `step`. A non-positive (or
/// non-finite) step leaves the value untouched.
pub fn snap_to_step(value: f64, step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Snap a linear coordinate according to the held modifiers.
pub fn snap_coordinate(value: f64, options: &SnapOptions) -> f64 {
    snap_to_step(value, options.coordinate_step())
}

/// Snap an angle according to the held modifiers. The result is always
/// normalized to [0, 360).
pub fn snap_angle(angle: f64, options: &SnapOptions) -> f64 {
    match options.angle_step() {
        Some(step) => normalize_angle(snap_to_step(angle, step)),
        None => normalize_angle(angle),
    }
}
