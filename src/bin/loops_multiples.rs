//! The first n numbers that are multiples of 3 but not of 4, stepping by 3.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::join_spaced;
use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_multiples";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n = input.read_count_within(settings.capacity)?;
    let found = numbers::multiples_of_three_not_four_stride(n);
    writeln!(out, "{}", join_spaced(found))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
