use tracing::trace;

use crate::error::{DrillError, DrillResult};

// =============================================================================
// Milestone 1: Reversal
// =============================================================================

/// Swaps `values[i]` with `values[n - i - 1]` for the first half.
pub fn reverse_in_place(values: &mut [i64]) {
    let n = values.len();
    for i in 0..n / 2 {
        let last = n - i - 1;
        values.swap(i, last);
        trace!(i, last, "swapped");
    }
}

/// First attempt at the same reversal: the element from slot 0 is parked in
/// its own temporary, every later one in a shared temporary.
pub fn reverse_with_first_slot(values: &mut [i64]) {
    let n = values.len();
    let mut first = 0;
    let mut temp = 0;

    for i in 0..n / 2 {
        if i == 0 {
            first = values[i];
        } else {
            temp = values[i];
        }

        values[i] = values[n - i - 1];

        values[n - i - 1] = if i == 0 { first } else { temp };
    }
}

// =============================================================================
// Milestone 2: Min / max exchange
// =============================================================================

/// Every occurrence of the minimum becomes the maximum and vice versa.
pub fn swap_min_max(values: &mut [i64]) {
    let (Some(&lower), Some(&higher)) = (values.iter().min(), values.iter().max()) else {
        return;
    };
    trace!(lower, higher, "extremes");

    for value in values.iter_mut() {
        if *value == lower {
            *value = higher;
        } else if *value == higher {
            *value = lower;
        }
    }
}

// =============================================================================
// Milestone 3: Unique list from an ascending sequence
// =============================================================================

/// Drops repeated neighbours. The input must be ascending; the first
/// descent is reported with its index.
pub fn unique_sorted(values: &[i64]) -> DrillResult<Vec<i64>> {
    let Some(&first) = values.first() else {
        return Ok(Vec::new());
    };
    let mut unique = vec![first];

    for i in 1..values.len() {
        if values[i] < values[i - 1] {
            return Err(DrillError::NotAscending { index: i });
        }
        if values[i] != values[i - 1] {
            unique.push(values[i]);
        }
    }
    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_reverse_in_place() {
        let mut values = vec![1, 2, 3, 4, 5];
        reverse_in_place(&mut values);
        assert_eq!(values, vec![5, 4, 3, 2, 1]);

        let mut even = vec![1, 2, 3, 4];
        reverse_in_place(&mut even);
        assert_eq!(even, vec![4, 3, 2, 1]);

        let mut empty: Vec<i64> = vec![];
        reverse_in_place(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_reverse_is_involution_and_variants_agree() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..200 {
            let len = rng.gen_range(0..30);
            let original: Vec<i64> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();

            let mut once = original.clone();
            reverse_in_place(&mut once);
            let mut other = original.clone();
            reverse_with_first_slot(&mut other);
            assert_eq!(once, other);

            let mut expected = original.clone();
            expected.reverse();
            assert_eq!(once, expected);

            reverse_in_place(&mut once);
            assert_eq!(once, original);
        }
    }

    #[test]
    fn test_swap_min_max() {
        let mut values = vec![4, 1, 3, 10, 8, 10, 10];
        swap_min_max(&mut values);
        assert_eq!(values, vec![4, 10, 3, 1, 8, 1, 1]);
    }

    #[test]
    fn test_swap_min_max_edge_cases() {
        let mut same = vec![2, 2];
        swap_min_max(&mut same);
        assert_eq!(same, vec![2, 2]);

        let mut empty: Vec<i64> = vec![];
        swap_min_max(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_unique_sorted() {
        let values = [1, 1, 2, 2, 2, 5, 6, 6, 7, 8, 9, 9];
        assert_eq!(unique_sorted(&values).unwrap(), vec![1, 2, 5, 6, 7, 8, 9]);
        assert_eq!(unique_sorted(&[]).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_unique_sorted_rejects_descent() {
        let err = unique_sorted(&[1, 3, 2]).unwrap_err();
        assert!(matches!(err, DrillError::NotAscending { index: 2 }));
    }
}
