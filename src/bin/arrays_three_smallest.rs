//! The three lowest values, ascending. Needs at least three inputs.
//!
//! Run with: echo "5  4 1 3 10 8" | cargo run --bin arrays_three_smallest

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::join_spaced;
use drills::{runner, scan, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_three_smallest";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    let lowest = scan::three_smallest(&values).ok_or_else(|| DrillError::too_few(3, values.len()))?;
    writeln!(out, "{}", join_spaced(lowest))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
