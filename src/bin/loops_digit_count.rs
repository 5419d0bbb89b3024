//! Number of digits, by dividing by ten until nothing is left.
//!
//! Zero and negative inputs print 0, as the loop condition never holds.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_digit_count";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let num: i64 = input.next()?;
    writeln!(out, "{}", numbers::digit_count(num))?;
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
    fn test_digit_count() {
        assert_eq!(output_for("1234").unwrap(), "4\n");
        assert_eq!(output_for("0").unwrap(), "0\n");
    }
}
