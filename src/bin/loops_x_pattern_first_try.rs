//! The first cross attempt: n + 1 rows, so 4 draws the five-row cross.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{patterns, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_x_pattern_first_try";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n = input.read_count_within(settings.capacity)?;
    for line in patterns::x_pattern_first_try(n) {
        writeln!(out, "{line}")?;
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
    fn test_one_row_more() {
        assert_eq!(output_for("4").unwrap(), "*   *\n * *\n  *\n * *\n*   *\n");
        assert_eq!(output_for("0").unwrap(), "*\n");
    }
}
