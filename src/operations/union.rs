use std::ops::BitOr;

use smallvec::{smallvec, SmallVec};

use crate::geometry::sweep::SweepFrame;
use crate::geometry::{Angle, AngleRange};
use crate::math::approx_eq;

/// Computes the union of two ranges.
///
/// Produces one range when the arcs overlap or touch, and both operands
/// unchanged (first, then second) when they are disjoint. Two arcs that
/// together cover the whole circle cannot be merged into a single range,
/// so they are also returned unchanged.
pub struct RangeUnion {
    first: AngleRange,
    second: AngleRange,
}

impl RangeUnion {
    /// Creates a new `RangeUnion` operation.
    #[must_use]
    pub fn new(first: AngleRange, second: AngleRange) -> Self {
        Self { first, second }
    }

    /// Executes the union.
    #[must_use]
    pub fn execute(&self) -> SmallVec<[AngleRange; 2]> {
        let (a, b) = (self.first, self.second);
        if b.is_empty() {
            return smallvec![a];
        }
        if a.is_empty() {
            return smallvec![b];
        }
        if !a.touches(&b) {
            tracing::trace!(%a, %b, "union of disjoint ranges");
            return smallvec![a, b];
        }

        // Work in the frame of `a`: it spans [0, len(a)] and `b` starts at `s`.
        let frame = SweepFrame::new(&a);
        let s = frame.offset_of(b.start());
        let e = frame.offset_of(b.end());
        let len = frame.length();

        let (start, start_inclusive) = if frame.wraps(&b) {
            if s < len || approx_eq(s, len) {
                tracing::debug!(%a, %b, "union covers the full circle, keeping operands");
                return smallvec![a, b];
            }
            (b.start(), b.start_inclusive())
        } else if approx_eq(s, 0.0) {
            (a.start(), a.start_inclusive() || b.start_inclusive())
        } else {
            (a.start(), a.start_inclusive())
        };
        let (end, end_inclusive) = outer_end(&a, &b, len, e);

        let merged = AngleRange::new(start, end, start_inclusive, end_inclusive);
        tracing::trace!(%a, %b, %merged, "merged ranges");
        smallvec![merged]
    }
}

/// Picks whichever end reaches further from the start of `a`.
fn outer_end(a: &AngleRange, b: &AngleRange, a_len: f64, b_end: f64) -> (Angle, bool) {
    if approx_eq(b_end, a_len) {
        (a.end(), a.end_inclusive() || b.end_inclusive())
    } else if b_end > a_len {
        (b.end(), b.end_inclusive())
    } else {
        (a.end(), a.end_inclusive())
    }
}

impl AngleRange {
    /// Returns the union of two ranges as one or two ranges.
    ///
    /// See [`RangeUnion`].
    #[must_use]
    pub fn union(&self, other: &Self) -> SmallVec<[Self; 2]> {
        RangeUnion::new(*self, *other).execute()
    }
}

impl BitOr for AngleRange {
    type Output = SmallVec<[AngleRange; 2]>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}
