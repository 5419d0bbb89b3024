//! Keep only the words spelled with one 'n' and one 'o', any case.
//!
//! Run with: echo "9 Yss NO nooOO oN Monst no nN oOOoo oO" | cargo run --bin loops_no_words

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::join_spaced;
use drills::{basics, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_no_words";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n = input.read_count()?;
    let words = input.read_words(n, settings.capacity)?;
    writeln!(out, "{}", join_spaced(basics::no_words(&words)))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
