use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::verdict;
use drills::{checks, runner, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_palindrome";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    writeln!(out, "{}", verdict(checks::is_palindrome(&values)))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
