use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{ArcsetError, Result};
use crate::math::{approx_eq, normalize_radians, Vector2, DEBUG_PRECISION, TOLERANCE};

/// A direction on the circle.
///
/// The radian value is normalized into `[0, 2π)` on every construction and
/// every arithmetic step, so no other representative can be observed.
///
/// Equality and ordering compare the normalized values directly, with
/// [`TOLERANCE`] as the equality band. Ordering is linear on `[0, 2π)`:
/// `359°` is *greater* than `1°`. It exists for endpoint bookkeeping and is
/// not an angular distance.
#[derive(Clone, Copy, Default)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero direction.
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Creates an angle from radians, normalizing into `[0, 2π)`.
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians: normalize_radians(radians),
        }
    }

    /// Creates an angle from degrees, normalizing into `[0, 2π)`.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Creates the direction of a 2D vector, or `None` for a zero-length vector.
    #[must_use]
    pub fn from_vector(v: &Vector2) -> Option<Self> {
        if v.norm() < TOLERANCE {
            return None;
        }
        Some(Self::from_radians(v.y.atan2(v.x)))
    }

    /// Returns the normalized radian value in `[0, 2π)`.
    #[must_use]
    pub fn radians(self) -> f64 {
        self.radians
    }

    /// Returns the exact degree value in `[0, 360)`.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// Returns the degree value rounded to the nearest integer.
    ///
    /// This is the number shown by the [`Display`](fmt::Display) form, so an
    /// angle just below a full turn reads as `360`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded_degrees(self) -> i64 {
        self.degrees().round() as i64
    }

    /// Replaces the value with the normalized form of `radians`.
    pub fn set_radians(&mut self, radians: f64) -> &mut Self {
        self.radians = normalize_radians(radians);
        self
    }

    /// Replaces the value with the normalized form of `degrees`.
    pub fn set_degrees(&mut self, degrees: f64) -> &mut Self {
        self.set_radians(degrees.to_radians())
    }

    /// Returns the radian value as a plain float.
    #[must_use]
    pub fn to_float(self) -> f64 {
        self.radians
    }

    /// Returns the radian value truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_int(self) -> i64 {
        self.radians.trunc() as i64
    }

    #[must_use]
    pub fn sin(self) -> f64 {
        self.radians.sin()
    }

    #[must_use]
    pub fn cos(self) -> f64 {
        self.radians.cos()
    }

    /// Returns the unit vector pointing in this direction.
    #[must_use]
    pub fn to_unit_vector(self) -> Vector2 {
        Vector2::new(self.cos(), self.sin())
    }

    /// Divides the angle by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`ArcsetError::DivisionByZero`] if `divisor` is exactly zero.
    pub fn divide(self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            tracing::debug!(angle = self.radians, "rejected division by zero");
            return Err(ArcsetError::DivisionByZero);
        }
        Ok(Self::from_radians(self.radians / divisor))
    }

    /// Divides in place; the value is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`ArcsetError::DivisionByZero`] if `divisor` is exactly zero.
    pub fn div_assign_checked(&mut self, divisor: f64) -> Result<()> {
        *self = self.divide(divisor)?;
        Ok(())
    }
}

impl PartialEq for Angle {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.radians, other.radians)
    }
}

impl PartialOrd for Angle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.radians.partial_cmp(&other.radians)
        }
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.radians
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} deg", self.rounded_degrees())
    }
}

impl fmt::Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({:.*} rad)", DEBUG_PRECISION, self.radians)
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl Add<f64> for Angle {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        Self::from_radians(self.radians + rhs)
    }
}

impl Add<Angle> for f64 {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl Sub<f64> for Angle {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        Self::from_radians(self.radians - rhs)
    }
}

impl Sub<Angle> for f64 {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self - rhs.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, rhs: Angle) -> Angle {
        Angle::from_radians(self * rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<f64> for Angle {
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl SubAssign<f64> for Angle {
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Angle {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}
