//! T test cases; each is a count followed by that many integers.
//! Prints the minimum of every case on its own line.
//!
//! Run with: echo "2  6 10 50 30 20 70 4  3 10 5 30" | cargo run --bin loops_min_per_case

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{runner, scan, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "loops_min_per_case";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let cases = input.read_count()?;
    for _ in 0..cases {
        let values = input.read_counted(settings.capacity)?;
        let lowest = scan::minimum(&values).ok_or_else(|| DrillError::too_few(1, 0))?;
        writeln!(out, "{lowest}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_for(input: &str) -> DrillResult<String> {
        runner::run_on_str(NAME, input, &Settings::default(), drill)
    }

    #[test]
    fn test_minimum_per_case() {
        assert_eq!(
            output_for("2  6 10 50 30 20 70 4  3 10 5 30").unwrap(),
            "4\n5\n"
        );
    }

    #[test]
    fn test_empty_case() {
        assert!(matches!(output_for("1  0"), Err(DrillError::TooFew { .. })));
    }
}
