//! For each test case print a + b² + c³ + ... over its values.
//!
//! Run with: echo "2  3 5 7 2  4 1 2 3 4" | cargo run --bin loops_power_sums

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{numbers, runner, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "loops_power_sums";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let cases = input.read_count()?;
    for _ in 0..cases {
        let values = input.read_counted(settings.capacity)?;
        let sum = numbers::power_sum(&values).ok_or(DrillError::Overflow("power sum"))?;
        writeln!(out, "{sum}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
