use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{basics, runner, DrillResult, Scanner, Settings};

const NAME: &str = "basics_scope";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let x: i64 = input.next()?;
    for line in basics::parity_report(x) {
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
    fn test_odd_and_even() {
        assert_eq!(
            output_for("11").unwrap(),
            "11 is odd\n22 inner variable\n11 x variable outside scope of if\n"
        );
        assert_eq!(output_for("4").unwrap(), "4 is even\n4 x variable outside scope of if\n");
    }

    #[test]
    fn test_negative_odd_prints_only_outer_line() {
        assert_eq!(output_for("-3").unwrap(), "-3 x variable outside scope of if\n");
    }
}
