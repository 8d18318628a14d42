//! Linear view of arcs, measured as forward offsets from a reference start.
//!
//! In the frame of a range `R`, `R` itself is the interval `[0, len(R)]`.
//! Any other range maps to one interval, or to two when it wraps past
//! `R.start`. Set operations then reduce to interval arithmetic on a line.

use smallvec::{smallvec, SmallVec};

use crate::math::{approx_eq, normalize_radians, FULL_TURN};

use super::{Angle, AngleRange};

/// One end of a [`Span`]. Carries the original angle so results can be
/// rebuilt from the operands' endpoints without recomputing them.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bound {
    pub offset: f64,
    pub angle: Angle,
    pub inclusive: bool,
}

impl Bound {
    fn flipped(self) -> Self {
        Self {
            inclusive: !self.inclusive,
            ..self
        }
    }
}

/// An interval of offsets in a sweep frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Span {
    pub lo: Bound,
    pub hi: Bound,
}

impl Span {
    pub fn is_empty(&self) -> bool {
        if approx_eq(self.lo.offset, self.hi.offset) {
            !(self.lo.inclusive && self.hi.inclusive)
        } else {
            self.lo.offset > self.hi.offset
        }
    }

    pub fn intersects(&self, other: &Self) -> bool {
        let overlap = Self {
            lo: later_lower(self.lo, other.lo),
            hi: earlier_upper(self.hi, other.hi),
        };
        !overlap.is_empty()
    }

    pub fn contains_span(&self, other: &Self) -> bool {
        other.is_empty() || (lower_not_after(self.lo, other.lo) && upper_not_before(self.hi, other.hi))
    }

    /// Removes `other` from this span, leaving at most two pieces.
    pub fn subtract(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if other.is_empty() || !self.intersects(other) {
            return smallvec![*self];
        }
        let leading = Self {
            lo: self.lo,
            hi: other.lo.flipped(),
        };
        let trailing = Self {
            lo: other.hi.flipped(),
            hi: self.hi,
        };
        [leading, trailing]
            .into_iter()
            .filter(|piece| !piece.is_empty())
            .collect()
    }

    pub fn into_range(self) -> AngleRange {
        AngleRange::new(self.lo.angle, self.hi.angle, self.lo.inclusive, self.hi.inclusive)
    }
}

fn later_lower(a: Bound, b: Bound) -> Bound {
    if approx_eq(a.offset, b.offset) {
        Bound {
            inclusive: a.inclusive && b.inclusive,
            ..a
        }
    } else if a.offset > b.offset {
        a
    } else {
        b
    }
}

fn earlier_upper(a: Bound, b: Bound) -> Bound {
    if approx_eq(a.offset, b.offset) {
        Bound {
            inclusive: a.inclusive && b.inclusive,
            ..a
        }
    } else if a.offset < b.offset {
        a
    } else {
        b
    }
}

fn lower_not_after(a: Bound, b: Bound) -> bool {
    if approx_eq(a.offset, b.offset) {
        a.inclusive || !b.inclusive
    } else {
        a.offset < b.offset
    }
}

fn upper_not_before(a: Bound, b: Bound) -> bool {
    if approx_eq(a.offset, b.offset) {
        a.inclusive || !b.inclusive
    } else {
        a.offset > b.offset
    }
}

/// Offsets measured forward from the start of a reference range.
pub(crate) struct SweepFrame {
    reference: AngleRange,
    length: f64,
}

impl SweepFrame {
    pub fn new(reference: &AngleRange) -> Self {
        Self {
            reference: *reference,
            length: reference.length(),
        }
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Forward offset of `angle` from the reference start, in `[0, 2π)`.
    ///
    /// Snaps to exactly `0` or the reference length on the reference endpoints.
    pub fn offset_of(&self, angle: Angle) -> f64 {
        if angle == self.reference.start() {
            0.0
        } else if angle == self.reference.end() {
            self.length
        } else {
            normalize_radians(angle.radians() - self.reference.start().radians())
        }
    }

    /// The reference range as a span.
    pub fn own_span(&self) -> Span {
        Span {
            lo: Bound {
                offset: 0.0,
                angle: self.reference.start(),
                inclusive: self.reference.start_inclusive(),
            },
            hi: Bound {
                offset: self.length,
                angle: self.reference.end(),
                inclusive: self.reference.end_inclusive(),
            },
        }
    }

    /// Returns whether `range` sweeps past the reference start.
    pub fn wraps(&self, range: &AngleRange) -> bool {
        let s = self.offset_of(range.start());
        let e = self.offset_of(range.end());
        e < s && !approx_eq(e, s)
    }

    /// Maps `range` into this frame. Empty spans are dropped.
    pub fn spans_of(&self, range: &AngleRange) -> SmallVec<[Span; 2]> {
        let lo = Bound {
            offset: self.offset_of(range.start()),
            angle: range.start(),
            inclusive: range.start_inclusive(),
        };
        let hi = Bound {
            offset: self.offset_of(range.end()),
            angle: range.end(),
            inclusive: range.end_inclusive(),
        };

        let spans: SmallVec<[Span; 2]> = if self.wraps(range) {
            // The reference start is interior to `range` unless `range` ends on it.
            let origin = Bound {
                offset: 0.0,
                angle: self.reference.start(),
                inclusive: if approx_eq(hi.offset, 0.0) {
                    hi.inclusive
                } else {
                    true
                },
            };
            let full_turn = Bound {
                offset: FULL_TURN,
                angle: self.reference.start(),
                inclusive: true,
            };
            smallvec![Span { lo: origin, hi }, Span { lo, hi: full_turn }]
        } else {
            smallvec![Span { lo, hi }]
        };
        spans.into_iter().filter(|span| !span.is_empty()).collect()
    }
}
