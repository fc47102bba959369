//! Canonical enumeration of unordered face pairs.
//!
//! For a maximum face value `N`, yields every `(a, b)` with
//! `0 <= a <= b <= N` exactly once: outer `a` ascending, inner `b` from `a`
//! ascending. Callers may rely on this order.

use std::iter::FusedIterator;

use crate::tokens::Faces;

/// Number of unordered pairs for a maximum face value: `(N+1)(N+2)/2`.
///
/// Zero for negative input. Computed in `u64` and saturated to `usize::MAX`
/// where the count does not fit (only reachable on 32-bit targets).
#[must_use]
pub fn pair_count(max_face_value: i32) -> usize {
    if max_face_value < 0 {
        return 0;
    }
    let n = max_face_value as u64;
    usize::try_from((n + 1) * (n + 2) / 2).unwrap_or(usize::MAX)
}

/// Iterate the canonical pair sequence for `max_face_value`.
///
/// ```
/// use domino_tokens::generator::face_pairs;
///
/// let pairs: Vec<_> = face_pairs(1).map(|f| f.as_tuple()).collect();
/// assert_eq!(pairs, vec![(0, 0), (0, 1), (1, 1)]);
/// ```
#[must_use]
pub fn face_pairs(max_face_value: i32) -> FacePairs {
    FacePairs::new(max_face_value)
}

/// Lazy iterator over canonical face pairs. See [`face_pairs`].
#[derive(Clone, Debug)]
pub struct FacePairs {
    max: i32,
    left: i32,
    right: i32,
    remaining: usize,
}

impl FacePairs {
    /// Create the iterator. A negative maximum yields nothing.
    #[must_use]
    pub fn new(max_face_value: i32) -> Self {
        Self {
            max: max_face_value,
            left: 0,
            right: 0,
            remaining: pair_count(max_face_value),
        }
    }

    /// Maximum face value being enumerated.
    #[must_use]
    pub fn max_face_value(&self) -> i32 {
        self.max
    }
}

impl Iterator for FacePairs {
    type Item = Faces;

    fn next(&mut self) -> Option<Faces> {
        if self.remaining == 0 {
            return None;
        }
        let current = Faces::new(self.left, self.right);
        self.remaining -= 1;

        // Stop advancing after the last pair so `N == i32::MAX` cannot overflow.
        if self.remaining > 0 {
            if self.right == self.max {
                self.left += 1;
                self.right = self.left;
            } else {
                self.right += 1;
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for FacePairs {}

impl FusedIterator for FacePairs {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuples(max: i32) -> Vec<(i32, i32)> {
        face_pairs(max).map(Faces::as_tuple).collect()
    }

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 1);
        assert_eq!(pair_count(2), 6);
        assert_eq!(pair_count(6), 28);
        assert_eq!(pair_count(9), 55);
        assert_eq!(pair_count(12), 91);
        assert_eq!(pair_count(-1), 0);
        assert_eq!(pair_count(i32::MIN), 0);
    }

    #[test]
    fn test_pair_count_at_i32_max() {
        let expected = (1u64 << 31) * ((1u64 << 31) + 1) / 2;
        let count = pair_count(i32::MAX);
        if cfg!(target_pointer_width = "64") {
            assert_eq!(count as u64, expected);
        } else {
            assert_eq!(count, usize::MAX);
        }
        assert_eq!(face_pairs(i32::MAX).len(), count);
    }

    #[test]
    fn test_zero_max_yields_double_blank() {
        assert_eq!(tuples(0), vec![(0, 0)]);
    }

    #[test]
    fn test_canonical_order() {
        assert_eq!(
            tuples(2),
            vec![(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_negative_max_is_empty() {
        assert!(tuples(-1).is_empty());
        assert!(tuples(-50).is_empty());
    }

    #[test]
    fn test_exact_size() {
        let mut pairs = face_pairs(6);
        assert_eq!(pairs.len(), 28);
        pairs.next();
        assert_eq!(pairs.len(), 27);
        assert_eq!(pairs.count(), 27);
    }

    #[test]
    fn test_fused_after_exhaustion() {
        let mut pairs = face_pairs(0);
        assert_eq!(pairs.next(), Some(Faces::new(0, 0)));
        assert_eq!(pairs.next(), None);
        assert_eq!(pairs.next(), None);
    }

    #[test]
    fn test_pairs_are_ordered_left_le_right() {
        for faces in face_pairs(12) {
            assert!(faces.left() <= faces.right());
            assert!(faces.left() >= 0 && faces.right() <= 12);
        }
    }
}
