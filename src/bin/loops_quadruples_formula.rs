//! The quadruple count for any bound, from `b(2b² + 1) / 3`.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{counting, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_quadruples_formula";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let bound: i64 = input.next()?;
    writeln!(out, "{}", counting::count_quadruples_closed_form(bound))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
