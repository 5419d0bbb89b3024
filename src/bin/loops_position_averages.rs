//! Average of the values in odd positions and in even positions.
//!
//! Run with: echo "3  10 20 30" | cargo run --bin loops_position_averages

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::format_real;
use drills::{runner, scan, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "loops_position_averages";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n = input.read_count_within(settings.capacity)?;
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        values.push(input.next::<f64>()?);
    }

    let averages = scan::position_averages(&values);
    let odd = averages.odd.ok_or(DrillError::DivisionByZero)?;
    let even = averages.even.ok_or(DrillError::DivisionByZero)?;
    writeln!(out, "{} {}", format_real(odd), format_real(even))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
