use nalgebra as na;

pub type Point2 = na::Point2<f64>;
pub type Vector2 = na::Vector2<f64>;
pub type Rotation2 = na::Rotation2<f64>;

pub const EPSILON: f64 = 1e-6;

/// Lower bound of the normalized authoring coordinate space.
pub const SANDBOX_MIN: f64 = 0.0;
/// Upper bound of the normalized authoring coordinate space.
pub const SANDBOX_MAX: f64 = 100.0;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        (self - other).abs() < EPSILON
    }
}

impl ApproxEq for [f64; 2] {
    fn approx_eq(&self, other: &Self) -> bool {
        utils_2d::points_equal(*self, *other)
    }
}

impl ApproxEq for Point2 {
    fn approx_eq(&self, other: &Self) -> bool {
        na::distance_squared(self, other) < EPSILON * EPSILON
    }
}

pub mod utils_2d;

pub mod primitives;
pub use primitives::*;

pub mod angles;
pub use angles::*;

pub mod snap;
pub use snap::*;

pub mod sandbox;
pub use sandbox::*;

pub mod arc;
pub use arc::*;
