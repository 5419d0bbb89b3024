//! Prompted input: an age, then two numbers to add.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{basics, runner, DrillResult, Scanner, Settings};

const NAME: &str = "basics_reading";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    write!(out, "Enter your age: ")?;
    out.flush()?;
    let age: i64 = input.next()?;
    writeln!(out, "age = {age}")?;
    writeln!(out, "---------------")?;

    write!(out, "Enter 2 numbers: ")?;
    out.flush()?;
    let a: i64 = input.next()?;
    let b: i64 = input.next()?;
    writeln!(out, "The sum of a + b = {}", a + b)?;
    writeln!(out, "---------------")?;

    for line in basics::constant_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
