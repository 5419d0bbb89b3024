use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{basics, runner, DrillResult, Scanner, Settings};

const NAME: &str = "basics_datatypes";

fn drill<R: BufRead, W: Write>(
    _input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    for line in basics::datatype_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
