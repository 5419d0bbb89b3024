//! A cross of stars, n rows wide.
//!
//! Run with: echo 5 | cargo run --bin loops_x_pattern

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{patterns, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_x_pattern";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n = input.read_count_within(settings.capacity)?;
    for line in patterns::x_pattern(n) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
