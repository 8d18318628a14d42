use std::fmt;
use std::f64::consts::TAU;

use crate::math::TOLERANCE;

use super::sweep::SweepFrame;
use super::Angle;

/// An arc swept counter-clockwise from `start` to `end`.
///
/// Each end is independently open or closed. The arc always denotes
/// "start, then forward to end", wrapping through zero when `end` is
/// numerically smaller than `start`. Its length is therefore in `[0, 2π)`.
///
/// When `start == end` the range is the single point `start` if both ends
/// are closed and empty otherwise. A full circle cannot be represented.
#[derive(Clone, Copy, PartialEq)]
pub struct AngleRange {
    start: Angle,
    end: Angle,
    start_inclusive: bool,
    end_inclusive: bool,
}

impl AngleRange {
    /// Creates a new range. Any pair of angles forms a valid forward arc.
    #[must_use]
    pub fn new(start: Angle, end: Angle, start_inclusive: bool, end_inclusive: bool) -> Self {
        Self {
            start,
            end,
            start_inclusive,
            end_inclusive,
        }
    }

    /// Creates a range with both ends closed.
    #[must_use]
    pub fn closed(start: Angle, end: Angle) -> Self {
        Self::new(start, end, true, true)
    }

    /// Creates a range from raw radian endpoints.
    #[must_use]
    pub fn from_radians(start: f64, end: f64, start_inclusive: bool, end_inclusive: bool) -> Self {
        Self::new(
            Angle::from_radians(start),
            Angle::from_radians(end),
            start_inclusive,
            end_inclusive,
        )
    }

    /// Creates a range from raw degree endpoints.
    #[must_use]
    pub fn from_degrees(start: f64, end: f64, start_inclusive: bool, end_inclusive: bool) -> Self {
        Self::new(
            Angle::from_degrees(start),
            Angle::from_degrees(end),
            start_inclusive,
            end_inclusive,
        )
    }

    #[must_use]
    pub fn start(&self) -> Angle {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Angle {
        self.end
    }

    #[must_use]
    pub fn start_inclusive(&self) -> bool {
        self.start_inclusive
    }

    #[must_use]
    pub fn end_inclusive(&self) -> bool {
        self.end_inclusive
    }

    /// Returns the swept angular extent in radians, in `[0, 2π)`.
    #[must_use]
    pub fn length(&self) -> f64 {
        if self.start == self.end {
            return 0.0;
        }
        let len = self.end.radians() - self.start.radians();
        if len < 0.0 {
            len + TAU
        } else {
            len
        }
    }

    /// Returns whether the range is a single closed point.
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.start == self.end && self.start_inclusive && self.end_inclusive
    }

    /// Returns whether the range contains no angle at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end && !(self.start_inclusive && self.end_inclusive)
    }

    /// Returns whether the range wraps through zero.
    #[must_use]
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Returns whether `angle` lies on the arc.
    #[must_use]
    pub fn contains(&self, angle: Angle) -> bool {
        if self.is_empty() {
            return false;
        }
        let after_start = if self.start_inclusive {
            angle >= self.start
        } else {
            angle > self.start
        };
        let before_end = if self.end_inclusive {
            angle <= self.end
        } else {
            angle < self.end
        };
        if self.wraps() {
            after_start || before_end
        } else {
            after_start && before_end
        }
    }

    /// Returns whether the whole arc of `other` lies within this arc.
    ///
    /// Endpoint containment alone is not enough: `[350°, 10°]` has both
    /// endpoints inside `[0°, 355°]` but sweeps through the gap.
    #[must_use]
    pub fn contains_range(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() || other.length() > self.length() + TOLERANCE {
            return false;
        }
        let frame = SweepFrame::new(self);
        let own = frame.own_span();
        frame
            .spans_of(other)
            .iter()
            .all(|span| own.contains_span(span))
    }

    /// Returns whether the two arcs share at least one angle.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let frame = SweepFrame::new(self);
        let own = frame.own_span();
        frame.spans_of(other).iter().any(|span| own.intersects(span))
    }

    /// Returns whether the union of the two arcs is connected.
    ///
    /// True when either range contains an endpoint of the other, or when
    /// both start at the same angle with positive length (two open starts
    /// still overlap just past the shared angle).
    #[must_use]
    pub fn touches(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.contains(other.start)
            || self.contains(other.end)
            || other.contains(self.start)
            || other.contains(self.end)
            || (self.start == other.start
                && self.length() > TOLERANCE
                && other.length() > TOLERANCE)
    }
}

impl fmt::Display for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}; {}{}",
            if self.start_inclusive { '[' } else { '(' },
            self.start,
            self.end,
            if self.end_inclusive { ']' } else { ')' },
        )
    }
}

impl fmt::Debug for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AngleRange({:?}, {:?}, {}, {})",
            self.start, self.end, self.start_inclusive, self.end_inclusive
        )
    }
}
