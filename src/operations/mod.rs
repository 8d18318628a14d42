mod difference;
mod union;

pub use difference::RangeDifference;
pub use union::RangeUnion;

#[cfg(test)]
mod tests {
    use crate::geometry::{Angle, AngleRange};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Ranges chosen to hit wrapping, shared endpoints, open ends and points.
    fn fixtures() -> Vec<AngleRange> {
        let table = [
            (0.0, 90.0, true, true),
            (0.0, 90.0, false, false),
            (30.0, 60.0, true, true),
            (45.0, 90.0, true, false),
            (90.0, 180.0, false, true),
            (350.0, 10.0, true, true),
            (300.0, 30.0, true, false),
            (170.0, 20.0, false, true),
            (60.0, 60.0, true, true),
            (0.0, 359.0, true, true),
            (200.0, 250.0, true, true),
        ];
        table.iter()
            .map(|&(a, b, si, ei)| AngleRange::from_degrees(a, b, si, ei))
            .collect()
    }

    /// Probe angles: every whole and half degree.
    fn probes() -> impl Iterator<Item = Angle> {
        (0..720).map(|i| Angle::from_degrees(f64::from(i) * 0.5))
    }

    fn any_contains(ranges: &[AngleRange], angle: Angle) -> bool {
        ranges.iter().any(|r| r.contains(angle))
    }

    #[test]
    fn union_covers_exactly_both_operands() {
        init_tracing();
        for a in fixtures() {
            for b in fixtures() {
                let union = a.union(&b);
                assert!(!union.is_empty() && union.len() <= 2, "{a} | {b}");
                for p in probes() {
                    assert_eq!(
                        any_contains(&union, p),
                        a.contains(p) || b.contains(p),
                        "{a} | {b} at {p:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn union_is_symmetric_as_a_set() {
        for a in fixtures() {
            for b in fixtures() {
                let ab = a.union(&b);
                let ba = b.union(&a);
                assert_eq!(ab.len(), ba.len(), "{a} | {b}");
                for p in probes() {
                    assert_eq!(any_contains(&ab, p), any_contains(&ba, p), "{a} | {b} at {p:?}");
                }
            }
        }
    }

    #[test]
    fn difference_removes_exactly_the_subtrahend() {
        init_tracing();
        for a in fixtures() {
            for b in fixtures() {
                let diff = a.difference(&b);
                assert!(diff.len() <= 2, "{a} - {b}");
                for p in probes() {
                    assert_eq!(
                        any_contains(&diff, p),
                        a.contains(p) && !b.contains(p),
                        "{a} - {b} at {p:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn difference_pieces_are_inside_the_minuend() {
        for a in fixtures() {
            for b in fixtures() {
                for piece in a.difference(&b) {
                    assert!(a.contains_range(&piece), "{piece} from {a} - {b}");
                    assert!(!piece.intersects(&b), "{piece} from {a} - {b}");
                }
            }
        }
    }

    #[test]
    fn idempotence() {
        for r in fixtures() {
            assert!(r.difference(&r).is_empty(), "{r}");
            assert_eq!(r.union(&r).as_slice(), &[r]);
        }
    }

    #[test]
    fn contains_range_matches_pointwise_containment() {
        for a in fixtures() {
            for b in fixtures() {
                let pointwise = probes().all(|p| !b.contains(p) || a.contains(p));
                if a.contains_range(&b) {
                    assert!(pointwise, "{a} contains {b}");
                }
            }
        }
    }
}
