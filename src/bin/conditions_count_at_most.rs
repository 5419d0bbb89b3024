//! Read X and five numbers; print how many are <= X and how many are > X.
//!
//! Run with: echo "10  7 2 50 90 4" | cargo run --bin conditions_count_at_most

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{runner, scan, DrillResult, Scanner, Settings};

const NAME: &str = "conditions_count_at_most";

const VALUES: usize = 5;

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let x: i64 = input.next()?;
    let values = input.read_values(VALUES, VALUES)?;
    let (at_most, above) = scan::count_at_most(x, &values);
    writeln!(out, "{at_most} {above}")?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
