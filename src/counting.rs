//! Counting tuples over small ranges.
//!
//! Each problem has a brute-force version that enumerates every range and a
//! faster one that derives the last variable from the others. They must
//! always agree.

use std::ops::RangeInclusive;

use tracing::debug;

// =============================================================================
// Milestone 1: A + B == SUM
// =============================================================================

/// Pairs `(a, b)` with `1 <= a <= n`, `1 <= b <= m` and `a + b == sum`.
/// At most one `b` fits each `a`, so `b` is computed rather than searched.
pub fn pairs_with_sum(n: i64, m: i64, sum: i64) -> impl Iterator<Item = (i64, i64)> {
    (1..=n).filter_map(move |a| {
        let b = sum - a;
        (1 <= b && b <= m).then_some((a, b))
    })
}

/// Same pairs by testing every `(a, b)` in the grid.
pub fn pairs_with_sum_naive(n: i64, m: i64, sum: i64) -> impl Iterator<Item = (i64, i64)> {
    (1..=n).flat_map(move |a| (1..=m).filter(move |&b| a + b == sum).map(move |b| (a, b)))
}

// =============================================================================
// Milestone 2: A + B <= C
// =============================================================================

/// `1 <= a <= n`, `a <= b <= m`, `1 <= c <= w`, `a + b <= c`.
pub fn count_triples_naive(n: i64, m: i64, w: i64) -> u64 {
    let mut steps = 0;
    for a in 1..=n {
        for b in a..=m {
            for c in 1..=w {
                if a + b <= c {
                    steps += 1;
                }
            }
        }
    }
    steps
}

/// For fixed `a` and `b` every `c` in `a+b..=w` qualifies.
pub fn count_triples(n: i64, m: i64, w: i64) -> u64 {
    let mut steps = 0;
    for a in 1..=n {
        for b in a..=m {
            let smallest_c = (a + b).max(1);
            if smallest_c <= w {
                steps += (w - smallest_c + 1) as u64;
            }
        }
    }
    steps
}

// =============================================================================
// Milestone 3: a + b == c + d
// =============================================================================

/// Four nested loops over `1..=bound`.
pub fn count_quadruples_naive(bound: i64) -> u64 {
    let mut output = 0;
    for a in 1..=bound {
        for b in 1..=bound {
            for c in 1..=bound {
                for d in 1..=bound {
                    if a + b == c + d {
                        output += 1;
                    }
                }
            }
        }
    }
    output
}

/// Three loops; `d` follows from the other three.
pub fn count_quadruples(bound: i64) -> u64 {
    let mut count = 0;
    for a in 1..=bound {
        for b in 1..=bound {
            for c in 1..=bound {
                let d = a + b - c;
                if 1 <= d && d <= bound {
                    count += 1;
                }
            }
        }
    }
    debug!(bound, count, "quadruples");
    count
}

/// Sum over every `s` of (ways to write `s` as `a + b`)², which folds to
/// `bound * (2 * bound² + 1) / 3`.
pub fn count_quadruples_closed_form(bound: i64) -> u64 {
    if bound <= 0 {
        return 0;
    }
    let bound = bound as u64;
    bound * (2 * bound * bound + 1) / 3
}

// =============================================================================
// Milestone 4: Range filters
// =============================================================================

/// Pairs with `x < y` whose sum is divisible by 7.
pub fn count_div7_pairs(xs: RangeInclusive<i64>, ys: RangeInclusive<i64>) -> u64 {
    let mut output = 0;
    for x in xs {
        for y in ys.clone() {
            if x < y && (x + y) % 7 == 0 {
                output += 1;
            }
        }
    }
    output
}

/// How many closed intervals `[start, end]` contain `x`.
pub fn interval_hits(x: i64, intervals: &[(i64, i64)]) -> usize {
    intervals
        .iter()
        .map(|&(start, end)| usize::from(start <= x && x <= end))
        .sum()
}
