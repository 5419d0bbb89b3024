use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{patterns, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_diamond";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n = input.read_count_within(settings.capacity)?;
    for line in patterns::diamond(n) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
