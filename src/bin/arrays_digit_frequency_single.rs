//! Digit table for a single number, matching each digit against 0-9.
//! An input of 0 reports no digits.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{frequency, runner, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_digit_frequency_single";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    write!(out, "enter a number: ")?;
    out.flush()?;
    let value: i64 = input.next()?;

    let frequency = frequency::digit_frequencies_single(value);
    for (digit, count) in frequency.iter().enumerate() {
        writeln!(out, "{digit} {count}")?;
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

    fn table(counts: [usize; 10]) -> String {
        counts
            .iter()
            .enumerate()
            .map(|(digit, count)| format!("{digit} {count}\n"))
            .collect()
    }

    #[test]
    fn test_single_number_table() {
        let expected = table([0, 0, 0, 0, 0, 0, 0, 1, 1, 0]);
        assert_eq!(output_for("78").unwrap(), format!("enter a number: {expected}"));
    }

    #[test]
    fn test_zero_reports_nothing() {
        assert_eq!(output_for("0").unwrap(), format!("enter a number: {}", table([0; 10])));
    }
}
