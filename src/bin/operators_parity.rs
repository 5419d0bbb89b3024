//! Three ways to test for even, then two digit slices.
//!
//! Run with: echo "10  1234  12345" | cargo run --bin operators_parity

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "operators_parity";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let num: i64 = input.next()?;
    writeln!(
        out,
        "{} {} {}",
        u8::from(numbers::is_even_mod(num)),
        u8::from(numbers::is_even_div(num)),
        u8::from(numbers::is_even_last_digit(num))
    )?;
    writeln!(out, "---------------------")?;

    let num2: i64 = input.next()?;
    writeln!(out, "{}", numbers::sum_last_three_digits(num2))?;
    writeln!(out, "---------------------")?;

    let num3: i64 = input.next()?;
    writeln!(out, "{}", numbers::fourth_last_digit(num3))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
