//! How many times each digit 0-9 appears across n numbers.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{frequency, runner, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_digit_frequency";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    let occurrence = frequency::digit_frequencies(&values);
    for (digit, count) in occurrence.iter().enumerate() {
        writeln!(out, "{digit} {count}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
