//! `1x1 = 1` layout with a blank line after each block.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{patterns, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_multiplication_blocks";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n: u32 = input.next()?;
    let m: u32 = input.next()?;
    for line in patterns::multiplication_table_blocks(n, m) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
