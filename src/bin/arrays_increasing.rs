//! YES when the values never decrease.
//!
//! Run with: echo "5  1 0 7 8 9" | cargo run --bin arrays_increasing

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::verdict;
use drills::{checks, runner, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_increasing";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    writeln!(out, "{}", verdict(checks::is_non_decreasing(&values)))?;
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
    fn test_verdicts() {
        assert_eq!(output_for("4  1 2 3 4").unwrap(), "YES\n");
        assert_eq!(output_for("5  1 0 7 8 9").unwrap(), "NO\n");
        assert_eq!(output_for("1  7").unwrap(), "YES\n");
    }
}
