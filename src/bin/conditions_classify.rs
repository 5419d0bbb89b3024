//! small / good / bad / great, judged by the last three digits.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "conditions_classify";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n: i64 = input.next()?;
    writeln!(out, "{}", numbers::classify_number(n))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
