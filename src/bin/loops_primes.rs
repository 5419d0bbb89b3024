//! All primes <= n, comma separated.
//!
//! Run with: echo 18 | cargo run --bin loops_primes

use std::io::{BufRead, Write};
use std::process::ExitCode;

use itertools::Itertools;

use drills::{numbers, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_primes";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let target: i64 = input.next()?;
    writeln!(out, "{}", numbers::primes_up_to(target).iter().join(","))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
