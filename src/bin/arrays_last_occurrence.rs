//! n values, then q queries; print the last index of each query or -1.
//!
//! Run with: echo "5  1 2 7 3 7   3  7 9 2" | cargo run --bin arrays_last_occurrence

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::join_spaced;
use drills::{runner, scan, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_last_occurrence";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    let queries = input.read_counted(settings.capacity)?;

    let answers = scan::last_occurrences(&values, &queries)
        .into_iter()
        .map(|found| found.map_or(-1, |index| index as i64));
    writeln!(out, "{}", join_spaced(answers))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
