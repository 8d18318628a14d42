use std::ops::Sub;

use smallvec::{smallvec, SmallVec};

use crate::geometry::sweep::{Span, SweepFrame};
use crate::geometry::AngleRange;

/// Computes the set difference `minuend - subtrahend` of two ranges.
///
/// The result has zero, one or two ranges, ordered along the sweep of the
/// minuend: the leading remainder before the trailing one. Every endpoint
/// of the result is an endpoint of one of the operands, with the
/// subtrahend's boundary flipped between open and closed.
pub struct RangeDifference {
    minuend: AngleRange,
    subtrahend: AngleRange,
}

impl RangeDifference {
    /// Creates a new `RangeDifference` operation (minuend - subtrahend).
    #[must_use]
    pub fn new(minuend: AngleRange, subtrahend: AngleRange) -> Self {
        Self {
            minuend,
            subtrahend,
        }
    }

    /// Executes the difference.
    #[must_use]
    pub fn execute(&self) -> SmallVec<[AngleRange; 2]> {
        let (a, b) = (self.minuend, self.subtrahend);
        if a.is_empty() {
            return SmallVec::new();
        }
        if !a.intersects(&b) {
            tracing::trace!(%a, %b, "difference of disjoint ranges");
            return smallvec![a];
        }
        if b.contains_range(&a) {
            tracing::trace!(%a, %b, "difference removes the whole range");
            return SmallVec::new();
        }

        // `b` maps to one span, or two when it wraps past the start of `a`.
        let frame = SweepFrame::new(&a);
        let mut pieces: SmallVec<[Span; 2]> = smallvec![frame.own_span()];
        for cut in frame.spans_of(&b) {
            pieces = pieces.iter().flat_map(|piece| piece.subtract(&cut)).collect();
        }

        let result: SmallVec<[AngleRange; 2]> = pieces.into_iter().map(Span::into_range).collect();
        tracing::trace!(%a, %b, pieces = result.len(), "difference split range");
        result
    }
}

impl AngleRange {
    /// Returns the part of this range not covered by `other`.
    ///
    /// See [`RangeDifference`].
    #[must_use]
    pub fn difference(&self, other: &Self) -> SmallVec<[Self; 2]> {
        RangeDifference::new(*self, *other).execute()
    }
}

impl Sub for AngleRange {
    type Output = SmallVec<[AngleRange; 2]>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(&rhs)
    }
}
