//! Reverse the digits of n and print the reverse and three times it.
//!
//! Run with: echo 123 | cargo run --bin loops_reverse_number

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_reverse_number";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n: i32 = input.next()?;
    let number = numbers::reverse_number(n);
    writeln!(out, "{} {}", number, number * 3)?;
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
    fn test_reverse_number() {
        assert_eq!(output_for("123").unwrap(), "321 963\n");
        assert_eq!(output_for("120").unwrap(), "21 63\n");
    }
}
