//! The nested-loop primality attempt. For n <= 2 no branch ever fires, so
//! nothing is printed.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::verdict;
use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_prime_check_nested";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n: i64 = input.next()?;
    if let Some(is_prime) = numbers::is_prime_nested(n) {
        writeln!(out, "{}", verdict(is_prime))?;
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
    fn test_nested_check() {
        assert_eq!(output_for("5").unwrap(), "YES\n");
        assert_eq!(output_for("4").unwrap(), "NO\n");
        assert_eq!(output_for("499").unwrap(), "YES\n");
    }

    #[test]
    fn test_no_verdict_up_to_two() {
        assert_eq!(output_for("2").unwrap(), "");
    }
}
