use tracing::trace;

/// Compares from both ends toward the middle, stopping at the first mismatch.
pub fn is_palindrome(values: &[i64]) -> bool {
    if values.is_empty() {
        return true;
    }
    let (mut i, mut j) = (0, values.len() - 1);

    while i < j {
        trace!(i, j, left = values[i], right = values[j], "compare");
        if values[i] != values[j] {
            return false;
        }
        i += 1;
        j -= 1;
    }
    true
}

/// `true` when every element is `>=` the one before it.
pub fn is_non_decreasing(values: &[i64]) -> bool {
    let Some(&first) = values.first() else {
        return true;
    };
    let mut previous = first;

    for &value in &values[1..] {
        if value < previous {
            return false;
        }
        previous = value;
    }
    true
}
