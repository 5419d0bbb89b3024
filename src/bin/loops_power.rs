use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{numbers, runner, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "loops_power";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let base: i64 = input.next()?;
    let exponent: u32 = input.next()?;
    let result = numbers::power(base, exponent).ok_or(DrillError::Overflow("power"))?;
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
    fn test_power() {
        assert_eq!(output_for("2 3").unwrap(), "8\n");
        assert!(matches!(output_for("10 30"), Err(DrillError::Overflow(_))));
    }
}
