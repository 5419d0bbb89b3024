use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::join_spaced;
use drills::{numbers, runner, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "loops_fibonacci";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n = input.read_count()?;
    let sequence = numbers::fibonacci(n).ok_or(DrillError::Overflow("fibonacci"))?;
    writeln!(out, "{}", join_spaced(sequence))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
