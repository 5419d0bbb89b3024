//! The three-loop count behind `loops_triples`.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{counting, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_triples_naive";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n: i64 = input.next()?;
    let m: i64 = input.next()?;
    let w: i64 = input.next()?;
    writeln!(out, "steps: {}", counting::count_triples_naive(n, m, w))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
