//! In how many of three intervals does x fall?
//!
//! Run with: echo "7  1 10  5 6  4 20" | cargo run --bin conditions_intervals

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{counting, runner, DrillResult, Scanner, Settings};

const NAME: &str = "conditions_intervals";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let x: i64 = input.next()?;
    let mut intervals = Vec::with_capacity(3);
    for _ in 0..3 {
        let start: i64 = input.next()?;
        let end: i64 = input.next()?;
        intervals.push((start, end));
    }
    writeln!(out, "{}", counting::interval_hits(x, &intervals))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
