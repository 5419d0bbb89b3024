use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{counting, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_div7_pairs";

fn drill<R: BufRead, W: Write>(
    _input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    writeln!(out, "{}", counting::count_div7_pairs(50..=300, 70..=400))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
