//! Most repeated value; on a tie the one seen first wins.
//!
//! Run with: echo "7  1 2 1 2 2 3 2" | cargo run --bin arrays_most_frequent

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{frequency, runner, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_most_frequent";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    let (value, repeat) =
        frequency::most_frequent_pairwise(&values).ok_or_else(|| DrillError::too_few(1, 0))?;
    writeln!(out, "{value} repeated {repeat} times")?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
