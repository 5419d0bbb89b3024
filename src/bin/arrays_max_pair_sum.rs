//! The pair with the largest sum (50 + 15 for `2 10 3 50 15`).

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{runner, scan, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_max_pair_sum";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    let result = scan::max_pair_sum(&values).ok_or_else(|| DrillError::too_few(2, values.len()))?;
    writeln!(out, "{result}")?;
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
    fn test_max_pair_sum() {
        assert_eq!(output_for("5  2 10 3 50 15").unwrap(), "65\n");
    }
}
