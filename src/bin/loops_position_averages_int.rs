//! Integer averages of odd and even positions, one per line, truncated.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{runner, scan, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "loops_position_averages_int";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    let averages = scan::position_averages_truncated(&values);
    let odd = averages.odd.ok_or(DrillError::DivisionByZero)?;
    let even = averages.even.ok_or(DrillError::DivisionByZero)?;
    writeln!(out, "{odd}")?;
    writeln!(out, "{even}")?;
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
    fn test_truncated_averages() {
        assert_eq!(output_for("3  10 20 30").unwrap(), "20\n20\n");
        assert_eq!(output_for("3  1 1 2").unwrap(), "1\n1\n");
    }

    #[test]
    fn test_empty_group() {
        assert!(matches!(output_for("1  5"), Err(DrillError::DivisionByZero)));
    }
}
