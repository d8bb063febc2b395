pub mod aabb;
pub mod orientation;

pub use aabb::Aabb;
pub use orientation::{orientation, Orientation};

use std::f64::consts::TAU;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for floating-point comparisons in tests and rotation round trips.
///
/// The intersection predicates themselves are exact and never use it.
pub const TOLERANCE: f64 = 1e-10;

/// Reduces an angle modulo a full turn, keeping its sign.
///
/// `3π` becomes `π`, `-3π` becomes `-π`, and exact multiples of `2π` become `0`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    angle % TAU
}

/// Bit-level key for a point, used to deduplicate coordinates.
///
/// `-0.0` and `0.0` map to the same key.
pub(crate) fn point_key(p: &Point2) -> (u64, u64) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}
