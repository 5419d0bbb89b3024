//! Unique list of an ascending sequence, order preserved.
//!
//! Run with: echo "12  1 1 2 2 2 5 6 6 7 8 9 9" | cargo run --bin arrays_unique

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::join_spaced;
use drills::{runner, transform, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_unique";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    let unique = transform::unique_sorted(&values)?;
    writeln!(out, "{}", join_spaced(unique))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
