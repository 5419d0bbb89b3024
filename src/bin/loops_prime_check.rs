use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::verdict;
use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_prime_check";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n: i64 = input.next()?;
    writeln!(out, "{}", verdict(numbers::is_prime(n)))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
