//! Digit-by-digit reversal printed as text, then each digit tripled.
//! Leading zeros of the reverse survive: 120 prints `021 063`.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_reverse_digits";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n: i64 = input.next()?;
    writeln!(
        out,
        "{} {}",
        numbers::reverse_digits_text(n),
        numbers::tripled_digits_text(n)
    )?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
