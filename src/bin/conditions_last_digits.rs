use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "conditions_last_digits";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let num: i64 = input.next()?;
    writeln!(out, "{}", numbers::last_digits(num))?;
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
    fn test_last_digits() {
        assert_eq!(output_for("987").unwrap(), "87\n");
        assert_eq!(output_for("12345").unwrap(), "345\n");
        assert_eq!(output_for("1234").unwrap(), "4\n");
    }
}
