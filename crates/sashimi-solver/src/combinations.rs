//! Lazy k-subset enumeration over small ordered slices.

use std::iter::FusedIterator;

use tinyvec::ArrayVec;

/// Maximum number of source items a [`Combinations`] iterator can hold.
///
/// This matches the number of houses on the board.
pub const MAX_ITEMS: usize = 27;

/// A single combination produced by [`Combinations`].
pub type Combination<T> = ArrayVec<[T; MAX_ITEMS]>;

/// Iterator over all size-`k` combinations of a slice, in lexicographic order
/// of source positions.
///
/// Created by [`combinations`].
#[derive(Debug, Clone)]
pub struct Combinations<T>
where
    T: Default,
{
    items: ArrayVec<[T; MAX_ITEMS]>,
    indices: ArrayVec<[usize; MAX_ITEMS]>,
    remaining: usize,
}

/// Returns an iterator over every size-`k` combination of `items`.
///
/// Combinations keep the source order of `items` and are yielded in
/// lexicographic order of their positions, so the output is deterministic.
/// `k == 0`, `k > items.len()` and inputs longer than [`MAX_ITEMS`] yield an
/// empty iterator.
///
/// # Examples
///
/// ```
/// use sashimi_solver::combinations::combinations;
///
/// let combos: Vec<Vec<u8>> = combinations(&[1, 2, 3, 4], 2)
///     .map(|combo| combo.to_vec())
///     .collect();
/// assert_eq!(
///     combos,
///     vec![vec![1, 2], vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4], vec![3, 4]]
/// );
/// ```
#[must_use]
pub fn combinations<T>(items: &[T], k: usize) -> Combinations<T>
where
    T: Copy + Default,
{
    let n = items.len();
    if k == 0 || k > n || n > MAX_ITEMS {
        return Combinations {
            items: ArrayVec::new(),
            indices: ArrayVec::new(),
            remaining: 0,
        };
    }
    Combinations {
        items: items.iter().copied().collect(),
        indices: (0..k).collect(),
        remaining: binomial(n, k),
    }
}

fn binomial(n: usize, k: usize) -> usize {
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

impl<T> Combinations<T>
where
    T: Copy + Default,
{
    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl<T> Iterator for Combinations<T>
where
    T: Copy + Default,
{
    type Item = Combination<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let combo = self.indices.iter().map(|&i| self.items[i]).collect();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(combo)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Combinations<T> where T: Copy + Default {}
impl<T> FusedIterator for Combinations<T> where T: Copy + Default {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_order_is_lexicographic() {
        let combos: Vec<Vec<u8>> = combinations(&[0, 1, 2, 3, 4], 3)
            .map(|combo| combo.to_vec())
            .collect();
        assert_eq!(combos.len(), 10);
        assert_eq!(combos.first(), Some(&vec![0, 1, 2]));
        assert_eq!(combos.get(1), Some(&vec![0, 1, 3]));
        assert_eq!(combos.last(), Some(&vec![2, 3, 4]));
        let mut sorted = combos.clone();
        sorted.sort();
        assert_eq!(sorted, combos);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(combinations(&[1, 2, 3], 0).count(), 0);
        assert_eq!(combinations(&[1, 2, 3], 4).count(), 0);
        assert_eq!(combinations::<u8>(&[], 1).count(), 0);
        assert_eq!(combinations(&[7, 8, 9], 3).count(), 1);
        assert_eq!(combinations(&[7, 8, 9], 1).count(), 3);
        assert_eq!(combinations(&[0_u8; MAX_ITEMS + 1], 2).count(), 0);
    }

    #[test]
    fn test_size_hint_is_exact() {
        let mut iter = combinations(&[0_u8; MAX_ITEMS], 3);
        assert_eq!(iter.len(), 2925);
        iter.next();
        assert_eq!(iter.len(), 2924);
        assert_eq!(iter.count(), 2924);
    }

    proptest! {
        #[test]
        fn prop_count_matches_binomial(n in 0_usize..=12, k in 0_usize..=12) {
            let items: Vec<usize> = (0..n).collect();
            let expected = if k == 0 || k > n { 0 } else { binomial(n, k) };
            prop_assert_eq!(combinations(&items, k).count(), expected);
        }

        #[test]
        fn prop_combinations_are_ascending_and_distinct(n in 1_usize..=10, k in 1_usize..=5) {
            let items: Vec<usize> = (0..n).collect();
            let mut previous: Option<Vec<usize>> = None;
            for combo in combinations(&items, k) {
                prop_assert_eq!(combo.len(), k);
                prop_assert!(combo.windows(2).all(|w| w[0] < w[1]));
                let combo = combo.to_vec();
                if let Some(prev) = &previous {
                    prop_assert!(prev < &combo);
                }
                previous = Some(combo);
            }
        }
    }
}
