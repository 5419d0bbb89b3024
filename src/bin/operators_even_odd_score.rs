use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "operators_even_odd_score";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n: i64 = input.next()?;
    writeln!(out, "{}", numbers::even_odd_score(n))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
