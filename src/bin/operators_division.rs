//! Integer vs real averages, the fractional part of x / y, and the
//! remainder of n / m computed without `%`.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::format_real;
use drills::{numbers, runner, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "operators_division";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let (mean, ratio, mean_ratio) = numbers::averages_demo();
    writeln!(out, "{mean}")?;
    writeln!(out, "{}", format_real(ratio))?;
    writeln!(out, "{}", format_real(mean_ratio))?;
    writeln!(out, "-------------")?;

    let x: f64 = input.next()?;
    let y: f64 = input.next()?;
    let fraction = numbers::fraction_part(x, y)?;
    writeln!(out, "{}", format_real(x / y))?;
    writeln!(out, "{}", format_real(fraction))?;
    writeln!(out, "-------------")?;

    let n: i64 = input.next()?;
    let m: i64 = input.next()?;
    let without_mod = numbers::remainder_without_mod(n, m)?;
    let with_mod = n.checked_rem(m).ok_or(DrillError::Overflow("remainder"))?;
    writeln!(out, "without %: {without_mod}")?;
    writeln!(out, "by using %: {with_mod}")?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
