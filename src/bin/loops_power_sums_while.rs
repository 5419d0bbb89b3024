//! Power sums with while-loops, each term through `power`.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{numbers, runner, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "loops_power_sums_while";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let cases = input.read_count()?;
    for _ in 0..cases {
        let values = input.read_counted(settings.capacity)?;
        let sum = numbers::power_sum_counted(&values).ok_or(DrillError::Overflow("power sum"))?;
        writeln!(out, "{sum}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
