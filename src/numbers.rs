//! Integer drills: primes, digits, powers, sequences, parity tricks.

use std::fmt;

use tracing::trace;

use crate::error::{DrillError, DrillResult};

// =============================================================================
// Milestone 1: Primality
// =============================================================================

/// Trial division over `2..n`, stopping at the first divisor.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    for i in 2..n {
        if n % i == 0 {
            trace!(n, divisor = i, "composite");
            return false;
        }
    }
    true
}

/// The first attempt: for every `i` in `1..=n` sweep all divisors, then
/// overwrite the verdict with "prime" whenever `i` does not divide `n`.
///
/// For `n <= 2` neither branch ever fires, so there is no verdict (`None`).
/// For larger `n` the answer happens to match [`is_prime`].
pub fn is_prime_nested(n: i64) -> Option<bool> {
    let mut verdict = None;
    for i in 1..=n {
        for j in 2..n {
            if n % j == 0 {
                verdict = Some(false);
            }
        }
        if n % i != 0 {
            verdict = Some(true);
        }
    }
    verdict
}

pub fn primes_up_to(target: i64) -> Vec<i64> {
    (2..=target).filter(|&n| is_prime(n)).collect()
}

// =============================================================================
// Milestone 2: Digits
// =============================================================================

/// Divides by ten while the value is positive. Zero and negative inputs
/// never enter the loop and report `0` digits.
pub fn digit_count(num: i64) -> u32 {
    let mut num = num;
    let mut digits_count = 0;
    while num > 0 {
        digits_count += 1;
        num /= 10;
    }
    digits_count
}

/// Zero has one digit; negative values count the digits of their magnitude.
pub fn digit_count_corrected(num: i64) -> u32 {
    let mut rest = num.unsigned_abs();
    if rest == 0 {
        return 1;
    }
    let mut digits = 0;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

/// `123` becomes `321`. Inputs `<= 0` yield `0` because the loop never runs.
pub fn reverse_number(n: i32) -> i64 {
    let mut n = i64::from(n);
    let mut number = 0;
    while n > 0 {
        let last_digit = n % 10;
        n /= 10;
        number = number * 10 + last_digit;
        trace!(last_digit, number, "reverse");
    }
    number
}

/// Digit-by-digit reversal as text, so `120` gives `"021"`. Zero gives an
/// empty string; negative values carry a sign on every digit.
pub fn reverse_digits_text(n: i64) -> String {
    let mut n = n;
    let mut text = String::new();
    while n != 0 {
        text.push_str(&(n % 10).to_string());
        n /= 10;
    }
    text
}

/// Same walk, but each digit is printed times three (`4` prints `12`).
pub fn tripled_digits_text(n: i64) -> String {
    let mut n = n;
    let mut text = String::new();
    while n != 0 {
        text.push_str(&((n % 10) * 3).to_string());
        n /= 10;
    }
    text
}

pub fn sum_last_three_digits(num: i64) -> i64 {
    let last1 = num % 10;
    let last2 = (num % 100) / 10;
    let last3 = (num % 1000) / 100;
    last1 + last2 + last3
}

/// `0` when the number has fewer than four digits.
pub fn fourth_last_digit(num: i64) -> i64 {
    (num / 1000) % 10
}

/// Odd numbers: last two digits below 1000, last three below 1000000,
/// otherwise the negation. Even numbers: the last digit.
pub fn last_digits(num: i64) -> i64 {
    if num % 2 != 0 {
        if num < 1000 {
            num % 100
        } else if num < 1_000_000 {
            num % 1000
        } else {
            -num
        }
    } else {
        num % 10
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberClass {
    Small,
    Good,
    Bad,
    Great,
}

impl fmt::Display for NumberClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            NumberClass::Small => "small",
            NumberClass::Good => "good",
            NumberClass::Bad => "bad",
            NumberClass::Great => "great",
        };
        write!(f, "Its a {word} number")
    }
}

/// Grades a number by its last three digits.
pub fn classify_number(n: i64) -> NumberClass {
    if n < 10000 {
        return NumberClass::Small;
    }
    let last1 = n % 10;
    let last2 = (n / 10) % 10;
    let last3 = (n / 100) % 10;
    let sum = last1 + last2 + last3;

    if sum % 2 != 0 {
        NumberClass::Great
    } else if last1 % 2 != 0 || last2 % 2 != 0 || last3 % 2 != 0 {
        NumberClass::Good
    } else {
        NumberClass::Bad
    }
}

// =============================================================================
// Milestone 3: Powers and sequences
// =============================================================================

pub fn power(base: i64, exponent: u32) -> Option<i64> {
    let mut result: i64 = 1;
    let mut remaining = exponent;
    while remaining > 0 {
        result = result.checked_mul(base)?;
        remaining -= 1;
    }
    Some(result)
}

/// `a + b² + c³ + ...`: the i-th value (1-based) is raised to the i-th power.
pub fn power_sum(values: &[i64]) -> Option<i64> {
    let mut sum: i64 = 0;
    for (i, &value) in values.iter().enumerate() {
        let mut result: i64 = 1;
        for _ in 0..=i {
            result = result.checked_mul(value)?;
        }
        sum = sum.checked_add(result)?;
    }
    Some(sum)
}

/// The while-loop version of [`power_sum`], built on [`power`].
pub fn power_sum_counted(values: &[i64]) -> Option<i64> {
    let mut sum: i64 = 0;
    let mut cnt = 1u32;
    while let Some(&value) = values.get(cnt as usize - 1) {
        sum = sum.checked_add(power(value, cnt)?)?;
        cnt += 1;
    }
    Some(sum)
}

/// Largest `n` for which every term of [`fibonacci`] fits in a `u64`
/// (the last one is F(93)).
pub const FIBONACCI_MAX_TERMS: usize = 92;

/// `0 1` followed by `n` more terms, or `None` once a term would overflow.
pub fn fibonacci(n: usize) -> Option<Vec<u64>> {
    if n > FIBONACCI_MAX_TERMS {
        return None;
    }
    let (mut a, mut b) = (0u64, 1u64);
    let mut sequence = Vec::with_capacity(n + 2);
    sequence.extend([a, b]);

    for _ in 0..n {
        let c = a.checked_add(b)?;
        a = b;
        b = c;
        sequence.push(c);
    }
    Some(sequence)
}

/// First `n` numbers divisible by 3 but not by 4, testing every integer.
pub fn multiples_of_three_not_four(n: usize) -> Vec<u64> {
    let mut found = Vec::new();
    let mut current = 0u64;
    while found.len() < n {
        if current % 3 == 0 && current % 4 != 0 {
            found.push(current);
        }
        current += 1;
    }
    found
}

/// Same sequence, jumping straight from one multiple of 3 to the next.
pub fn multiples_of_three_not_four_stride(n: usize) -> Vec<u64> {
    let mut found = Vec::new();
    let mut start = 3u64;
    while found.len() < n {
        if start % 4 != 0 {
            found.push(start);
        }
        start += 3;
    }
    found
}

// =============================================================================
// Milestone 4: Division and parity
// =============================================================================

pub fn is_even_mod(num: i64) -> bool {
    num % 2 == 0
}

/// Halves as a float and checks that nothing is left after the point.
pub fn is_even_div(num: i64) -> bool {
    let by2 = num as f64 / 2.0;
    by2 - by2.trunc() == 0.0
}

/// Looks at the last digit only. The remainder of a negative number is
/// negative, so negative even numbers are reported as not even.
pub fn is_even_last_digit(num: i64) -> bool {
    matches!(num % 10, 0 | 2 | 4 | 6 | 8)
}

/// 100 for even, 7 for odd, without branching.
pub fn even_odd_score(n: i64) -> i64 {
    let is_even = i64::from(n % 2 == 0);
    let is_odd = 1 - is_even;
    is_even * 100 + is_odd * 7
}

/// The part of `x / y` after the decimal point.
pub fn fraction_part(x: f64, y: f64) -> DrillResult<f64> {
    if y == 0.0 {
        return Err(DrillError::DivisionByZero);
    }
    let result = x / y;
    Ok(result - result.trunc())
}

/// `n - (n / m) * m`, i.e. the remainder without `%`.
pub fn remainder_without_mod(n: i64, m: i64) -> DrillResult<i64> {
    if m == 0 {
        return Err(DrillError::DivisionByZero);
    }
    let quotient = n.checked_div(m).ok_or(DrillError::Overflow("division"))?;
    Ok(n - quotient * m)
}

/// Averages over `1..=5`: integer mean, `(1+2+3)/(4+5)`, and mean of the
/// first three over mean of the last two.
pub fn averages_demo() -> (i64, f64, f64) {
    let (a, b, c, d, e) = (1i64, 2i64, 3i64, 4i64, 5i64);
    let integer_mean = (a + b + c + d + e) / 5;
    let ratio = (a + b + c) as f64 / (d + e) as f64;
    let mean_ratio = ((a + b + c) as f64 / 3.0) / ((d + e) as f64 / 2.0);
    (integer_mean, ratio, mean_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(is_prime(2));
        assert!(!is_prime(1));
        assert!(!is_prime(0));
        assert!(!is_prime(-7));
        assert!(is_prime(499));
    }

    #[test]
    fn test_nested_primality_matches_above_two() {
        for n in 3..200 {
            assert_eq!(is_prime_nested(n), Some(is_prime(n)), "n = {n}");
        }
    }

    #[test]
    fn test_nested_primality_has_no_verdict_for_small_inputs() {
        assert_eq!(is_prime_nested(2), None);
        assert_eq!(is_prime_nested(1), None);
        assert_eq!(is_prime_nested(0), None);
    }

    #[test]
    fn test_primes_up_to() {
        assert_eq!(primes_up_to(18), vec![2, 3, 5, 7, 11, 13, 17]);
        assert!(primes_up_to(1).is_empty());
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(1234), 4);
        assert_eq!(digit_count(9_876_543_210), 10);
        assert_eq!(digit_count(0), 0);
        assert_eq!(digit_count(-55), 0);
    }

    #[test]
    fn test_digit_count_corrected() {
        assert_eq!(digit_count_corrected(0), 1);
        assert_eq!(digit_count_corrected(-1234), 4);
        assert_eq!(digit_count_corrected(7), 1);
    }

    #[test]
    fn test_reverse_number() {
        assert_eq!(reverse_number(123), 321);
        assert_eq!(reverse_number(120), 21);
        assert_eq!(reverse_number(0), 0);
        assert_eq!(reverse_number(-45), 0);
        assert_eq!(reverse_number(i32::MAX), 7_463_847_412);
    }

    #[test]
    fn test_digit_text_variants() {
        assert_eq!(reverse_digits_text(123), "321");
        assert_eq!(tripled_digits_text(123), "963");
        assert_eq!(reverse_digits_text(120), "021");
        assert_eq!(tripled_digits_text(14), "123");
        assert_eq!(reverse_digits_text(0), "");
    }

    #[test]
    fn test_digit_slices() {
        assert_eq!(sum_last_three_digits(1234), 9);
        assert_eq!(fourth_last_digit(12345), 2);
        assert_eq!(fourth_last_digit(999), 0);
    }

    #[test]
    fn test_last_digits() {
        assert_eq!(last_digits(987), 87);
        assert_eq!(last_digits(12345), 345);
        assert_eq!(last_digits(1_234_567), -1_234_567);
        assert_eq!(last_digits(1234), 4);
    }

    #[test]
    fn test_classify_number() {
        assert_eq!(classify_number(9999), NumberClass::Small);
        assert_eq!(classify_number(12345), NumberClass::Good);
        assert_eq!(classify_number(10000), NumberClass::Bad);
        assert_eq!(classify_number(10012), NumberClass::Great);
        assert_eq!(NumberClass::Good.to_string(), "Its a good number");
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2, 3), Some(8));
        assert_eq!(power(7, 0), Some(1));
        assert_eq!(power(-3, 3), Some(-27));
        assert_eq!(power(10, 30), None);
    }

    #[test]
    fn test_power_sum() {
        assert_eq!(power_sum(&[5, 7, 2]), Some(62));
        assert_eq!(power_sum(&[1, 2, 3, 4]), Some(288));
        assert_eq!(power_sum_counted(&[5, 7, 2]), Some(62));
        assert_eq!(power_sum_counted(&[1, 2, 3, 4]), Some(288));
        assert_eq!(power_sum(&[]), Some(0));
        assert_eq!(power_sum_counted(&[]), Some(0));
    }

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(6), Some(vec![0, 1, 1, 2, 3, 5, 8, 13]));
        assert_eq!(fibonacci(0), Some(vec![0, 1]));
        assert_eq!(fibonacci(200), None);
    }

    #[test]
    fn test_fibonacci_bound_checked_before_allocating() {
        let longest = fibonacci(FIBONACCI_MAX_TERMS).unwrap();
        assert_eq!(longest.len(), FIBONACCI_MAX_TERMS + 2);
        assert_eq!(longest.last(), Some(&12_200_160_415_121_876_738));
        assert_eq!(fibonacci(FIBONACCI_MAX_TERMS + 1), None);
        assert_eq!(fibonacci(1 << 40), None);
    }

    #[test]
    fn test_multiples_of_three_not_four() {
        let expected = vec![3, 6, 9, 15, 18, 21, 27, 30, 33, 39, 42];
        assert_eq!(multiples_of_three_not_four(11), expected);
        assert_eq!(multiples_of_three_not_four_stride(11), expected);
        for n in 0..60 {
            assert_eq!(
                multiples_of_three_not_four(n),
                multiples_of_three_not_four_stride(n)
            );
        }
    }

    #[test]
    fn test_parity_checks() {
        for num in [10, 11, 0, 7, 128] {
            assert_eq!(is_even_div(num), is_even_mod(num));
            assert_eq!(is_even_last_digit(num), is_even_mod(num));
        }
        assert!(is_even_mod(-4));
        assert!(!is_even_last_digit(-4));
    }

    #[test]
    fn test_even_odd_score() {
        assert_eq!(even_odd_score(10), 100);
        assert_eq!(even_odd_score(11), 7);
        assert_eq!(even_odd_score(-3), 7);
    }

    #[test]
    fn test_division_drills() {
        let fraction = fraction_part(201.0, 25.0).unwrap();
        assert!((fraction - 0.04).abs() < 1e-9);
        assert!(matches!(fraction_part(1.0, 0.0), Err(DrillError::DivisionByZero)));

        assert_eq!(remainder_without_mod(13, 5).unwrap(), 3);
        assert_eq!(remainder_without_mod(-13, 5).unwrap(), -13 % 5);
        assert!(remainder_without_mod(1, 0).is_err());
        assert!(matches!(
            remainder_without_mod(i64::MIN, -1),
            Err(DrillError::Overflow(_))
        ));
        assert_eq!(remainder_without_mod(i64::MIN, 1).unwrap(), 0);
    }

    #[test]
    fn test_averages_demo() {
        let (mean, ratio, mean_ratio) = averages_demo();
        assert_eq!(mean, 3);
        assert!((ratio - 2.0 / 3.0).abs() < 1e-12);
        assert!((mean_ratio - 4.0 / 9.0).abs() < 1e-12);
    }
}
