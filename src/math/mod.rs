use std::f64::consts::TAU;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global tolerance for comparing radian values.
///
/// Used by angle equality, ordering, seam snapping and sweep offsets alike.
pub const TOLERANCE: f64 = 1e-9;

/// One full turn in radians.
pub const FULL_TURN: f64 = TAU;

/// Decimal places of radians shown in debug strings.
pub const DEBUG_PRECISION: usize = 2;

/// Reduces any finite radian value to its representative in `[0, 2π)`.
///
/// Values that land within [`TOLERANCE`] below a full turn snap to `0.0`,
/// so the seam never produces two representatives of the same direction.
/// Non-finite input gives an unspecified (non-finite) result.
#[must_use]
pub fn normalize_radians(radians: f64) -> f64 {
    let mut r = radians % FULL_TURN;
    if r < 0.0 {
        r += FULL_TURN;
    }
    if FULL_TURN - r < TOLERANCE {
        0.0
    } else {
        r
    }
}

/// Returns whether two radian values are within [`TOLERANCE`] of each other.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}
