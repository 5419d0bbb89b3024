//! Same listing as `loops_pair_sum`, testing every (A, B) in the grid.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{counting, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_pair_sum_naive";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n: i64 = input.next()?;
    let m: i64 = input.next()?;
    let sum: i64 = input.next()?;

    let mut steps = 0;
    for (a, b) in counting::pairs_with_sum_naive(n, m, sum) {
        writeln!(out, "{a}+{b}")?;
        steps += 1;
    }
    writeln!(out, "steps: {steps}")?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
