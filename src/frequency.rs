//! Occurrence counting: pairwise scans and offset frequency tables.

use std::ops::RangeInclusive;

use tracing::{debug, trace};

use crate::error::{DrillError, DrillResult};

// =============================================================================
// Milestone 1: Frequency table over a closed range
// =============================================================================

/// Most slots a table may allocate.
pub const MAX_TABLE_SLOTS: usize = 1 << 20;

/// Slots needed for `low..=high`; an empty range needs none. Computed in
/// `i128` so extreme bounds cannot overflow.
pub fn table_span(low: i64, high: i64) -> i128 {
    (i128::from(high) - i128::from(low) + 1).max(0)
}

/// Counts per value over `[low, high]`, stored at `value - low`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    low: i64,
    high: i64,
    counts: Vec<usize>,
    total: usize,
}

impl FrequencyTable {
    /// Fails with `CapacityExceeded` when the range needs more than
    /// [`MAX_TABLE_SLOTS`] slots.
    pub fn new(range: RangeInclusive<i64>) -> DrillResult<Self> {
        let (low, high) = (*range.start(), *range.end());
        let span = table_span(low, high);
        let slots = usize::try_from(span)
            .ok()
            .filter(|&slots| slots <= MAX_TABLE_SLOTS)
            .ok_or(DrillError::CapacityExceeded {
                requested: usize::try_from(span).unwrap_or(usize::MAX),
                capacity: MAX_TABLE_SLOTS,
            })?;

        Ok(Self {
            low,
            high,
            counts: vec![0; slots],
            total: 0,
        })
    }

    pub fn record(&mut self, value: i64) -> DrillResult<()> {
        let slot = self.slot(value).ok_or(DrillError::OutOfRange {
            value,
            low: self.low,
            high: self.high,
        })?;
        self.counts[slot] += 1;
        self.total += 1;
        Ok(())
    }

    pub fn count(&self, value: i64) -> usize {
        self.slot(value).map_or(0, |slot| self.counts[slot])
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Most frequent value and its count; on ties the smallest value wins.
    pub fn most_frequent(&self) -> Option<(i64, usize)> {
        if self.total == 0 {
            return None;
        }
        let mut max_pos = 0;
        for (i, &count) in self.counts.iter().enumerate() {
            if self.counts[max_pos] < count {
                max_pos = i;
            }
        }
        Some((self.low + max_pos as i64, self.counts[max_pos]))
    }

    /// `(value, count)` for every slot, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(move |(i, &count)| (self.low + i as i64, count))
    }

    fn slot(&self, value: i64) -> Option<usize> {
        if value < self.low || value > self.high {
            return None;
        }
        Some((value - self.low) as usize)
    }
}

pub fn tabulate(values: &[i64], range: RangeInclusive<i64>) -> DrillResult<FrequencyTable> {
    let mut table = FrequencyTable::new(range)?;
    for &value in values {
        table.record(value)?;
    }
    Ok(table)
}

// =============================================================================
// Milestone 2: Most frequent value
// =============================================================================

/// Counts each element against the whole input; the first element in scan
/// order that reaches the highest count wins.
pub fn most_frequent_pairwise(values: &[i64]) -> Option<(i64, usize)> {
    let mut best: Option<(i64, usize)> = None;

    for &candidate in values {
        let repeat = values.iter().filter(|&&other| other == candidate).count();
        trace!(candidate, repeat, "pairwise count");

        if best.map_or(true, |(_, max_repeat)| max_repeat < repeat) {
            best = Some((candidate, repeat));
        }
    }
    best
}

/// Same answer through a table over `0..=limit`.
pub fn most_frequent_table(values: &[i64], limit: i64) -> DrillResult<Option<(i64, usize)>> {
    let table = tabulate(values, 0..=limit)?;
    Ok(table.most_frequent())
}

/// Table over `low..=high`, negative values included.
pub fn shifted_most_frequent(
    values: &[i64],
    low: i64,
    high: i64,
) -> DrillResult<Option<(i64, usize)>> {
    let table = tabulate(values, low..=high)?;
    let result = table.most_frequent();
    debug!(?result, slots = table.counts.len(), "shifted table");
    Ok(result)
}

// =============================================================================
// Milestone 3: Repeat listing
// =============================================================================

/// Each distinct value once, in first-seen order, with its count.
pub fn repeat_counts(values: &[i64]) -> Vec<(i64, usize)> {
    let mut counted = vec![false; values.len()];
    let mut result = Vec::new();

    for i in 0..values.len() {
        if counted[i] {
            continue;
        }
        let mut counter = 1;
        for j in i + 1..values.len() {
            if values[i] == values[j] {
                counter += 1;
                counted[j] = true;
            }
        }
        result.push((values[i], counter));
    }
    result
}

// =============================================================================
// Milestone 4: Digit frequencies
// =============================================================================

/// How often each digit 0-9 appears across all values.
///
/// A zero value contributes one `0`; negative values count the digits of
/// their magnitude.
pub fn digit_frequencies(values: &[i64]) -> [usize; 10] {
    let mut occurrence = [0usize; 10];

    for &value in values {
        let mut rest = value.unsigned_abs();
        if rest == 0 {
            occurrence[0] += 1;
        }
        while rest > 0 {
            occurrence[(rest % 10) as usize] += 1;
            rest /= 10;
        }
    }
    occurrence
}

/// Digit counts for a single number, matching each digit against the
/// list of digits. The loop stops as soon as the value hits zero, so an
/// input of `0` reports no digits at all.
pub fn digit_frequencies_single(value: i64) -> [usize; 10] {
    const DIGITS: [u64; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let mut frequency = [0usize; 10];
    let mut rest = value.unsigned_abs();

    while rest != 0 {
        let digit = rest % 10;
        rest /= 10;
        for (j, &candidate) in DIGITS.iter().enumerate() {
            if candidate == digit {
                frequency[j] += 1;
            }
        }
    }
    frequency
}
