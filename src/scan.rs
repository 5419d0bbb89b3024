//! Single-pass scans: extremes, sums, averages, lookups.
//!
//! Every accumulator here is seeded from the first element it sees, so an
//! empty (or too short) input gives `None` rather than a stale baseline.

use tracing::trace;

// =============================================================================
// Milestone 1: Largest values
// =============================================================================

/// Largest and second largest value, in that order.
pub fn top_two(values: &[i64]) -> Option<(i64, i64)> {
    let (&first, rest) = values.split_first()?;
    let (&second, rest) = rest.split_first()?;

    let (mut max1, mut max2) = if first >= second {
        (first, second)
    } else {
        (second, first)
    };

    for &value in rest {
        if value > max1 {
            max2 = max1;
            max1 = value;
        } else if value > max2 {
            max2 = value;
        }
        trace!(value, max1, max2, "top two");
    }
    Some((max1, max2))
}

pub fn max_pair_sum(values: &[i64]) -> Option<i64> {
    top_two(values).map(|(max1, max2)| max1 + max2)
}

// =============================================================================
// Milestone 2: Smallest values
// =============================================================================

pub fn minimum(values: &[i64]) -> Option<i64> {
    let mut result = None;
    for &value in values {
        result = match result {
            Some(current) if current <= value => Some(current),
            _ => Some(value),
        };
    }
    result
}

/// The three lowest values in ascending order.
///
/// Keeps a three-slot window and evicts its current largest whenever a
/// smaller value shows up; the window is sorted once at the end.
pub fn three_smallest(values: &[i64]) -> Option<[i64; 3]> {
    if values.len() < 3 {
        return None;
    }
    let mut window = [values[0], values[1], values[2]];

    for &value in &values[3..] {
        let largest = largest_slot(&window);
        if value < window[largest] {
            window[largest] = value;
        }
        trace!(value, ?window, "window");
    }

    let largest = largest_slot(&window);
    window.swap(2, largest);
    if window[0] > window[1] {
        window.swap(0, 1);
    }
    Some(window)
}

fn largest_slot(window: &[i64; 3]) -> usize {
    let mut pos = 0;
    for j in 1..window.len() {
        if window[pos] < window[j] {
            pos = j;
        }
    }
    pos
}

// =============================================================================
// Milestone 3: Odd / even position averages
// =============================================================================

/// Averages of the values at odd (1st, 3rd, ...) and even (2nd, 4th, ...)
/// positions. A group with no members has no average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionAverages<T> {
    pub odd: Option<T>,
    pub even: Option<T>,
}

/// Integer version: each average truncates toward zero.
pub fn position_averages_truncated(values: &[i64]) -> PositionAverages<i64> {
    let (mut odd_sum, mut odd_cnt) = (0i64, 0i64);
    let (mut even_sum, mut even_cnt) = (0i64, 0i64);

    for (i, &value) in values.iter().enumerate() {
        let position = i + 1;
        if position % 2 != 0 {
            odd_sum += value;
            odd_cnt += 1;
        } else {
            even_sum += value;
            even_cnt += 1;
        }
    }

    PositionAverages {
        odd: (odd_cnt > 0).then(|| odd_sum / odd_cnt),
        even: (even_cnt > 0).then(|| even_sum / even_cnt),
    }
}

pub fn position_averages(values: &[f64]) -> PositionAverages<f64> {
    let (mut odd_sum, mut odd_count) = (0.0, 0u32);
    let (mut even_sum, mut even_count) = (0.0, 0u32);

    for (i, &value) in values.iter().enumerate() {
        if (i + 1) % 2 == 0 {
            even_sum += value;
            even_count += 1;
        } else {
            odd_sum += value;
            odd_count += 1;
        }
    }

    PositionAverages {
        odd: (odd_count > 0).then(|| odd_sum / f64::from(odd_count)),
        even: (even_count > 0).then(|| even_sum / f64::from(even_count)),
    }
}

// =============================================================================
// Milestone 4: Lookups and threshold counts
// =============================================================================

/// Index of the last element equal to `query`.
pub fn last_occurrence(values: &[i64], query: i64) -> Option<usize> {
    values.iter().rposition(|&value| value == query)
}

pub fn last_occurrences(values: &[i64], queries: &[i64]) -> Vec<Option<usize>> {
    queries
        .iter()
        .map(|&query| last_occurrence(values, query))
        .collect()
}

/// `(how many <= x, how many > x)`.
pub fn count_at_most(x: i64, values: &[i64]) -> (usize, usize) {
    let at_most: usize = values.iter().map(|&value| usize::from(value <= x)).sum();
    (at_most, values.len() - at_most)
}
