//! Same sequence as `loops_multiples`, testing every integer from 0.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::join_spaced;
use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_multiples_scan";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n = input.read_count_within(settings.capacity)?;
    let found = numbers::multiples_of_three_not_four(n);
    writeln!(out, "{}", join_spaced(found))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
