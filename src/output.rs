use std::fmt::Display;

use itertools::Itertools;

const SIGNIFICANT_DIGITS: i32 = 6;

pub fn join_spaced<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items.into_iter().join(" ")
}

pub fn verdict(ok: bool) -> &'static str {
    if ok {
        "YES"
    } else {
        "NO"
    }
}

/// Renders a real the way a default-configured output stream does (`%g`
/// with six significant digits): `8.04`, `0.666667`, `20`, and scientific
/// form such as `1e+07` once the decimal exponent is below -4 or at least 6.
pub fn format_real(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // the exponent is taken after rounding, so 999999.5 becomes 1e+06
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs());
    }

    let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_spaced() {
        assert_eq!(join_spaced([5, 4, 3, 2, 1]), "5 4 3 2 1");
        assert_eq!(join_spaced(Vec::<i64>::new()), "");
    }

    #[test]
    fn test_verdict() {
        assert_eq!(verdict(true), "YES");
        assert_eq!(verdict(false), "NO");
    }

    #[test]
    fn test_format_real_matches_stream_defaults() {
        assert_eq!(format_real(20.0), "20");
        assert_eq!(format_real(7.5), "7.5");
        assert_eq!(format_real(6.0 / 9.0), "0.666667");
        assert_eq!(format_real(2.0 / 4.5), "0.444444");
        assert_eq!(format_real(201.0 / 25.0), "8.04");
        assert_eq!(format_real(f64::from(3.14_f32)), "3.14");
        assert_eq!(format_real(-2.5), "-2.5");
        assert_eq!(format_real(0.0), "0");
        assert_eq!(format_real(123456.0), "123456");
        assert_eq!(format_real(0.0001), "0.0001");
    }

    #[test]
    fn test_format_real_switches_to_scientific() {
        assert_eq!(format_real(1e7), "1e+07");
        assert_eq!(format_real(1234567.0), "1.23457e+06");
        assert_eq!(format_real(999999.5), "1e+06");
        assert_eq!(format_real(0.00001234), "1.234e-05");
        assert_eq!(format_real(-2.5e-7), "-2.5e-07");
        assert_eq!(format_real(1e100), "1e+100");
    }
}
