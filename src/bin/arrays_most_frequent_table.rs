//! Most repeated value through a frequency array over `0..=value_limit`.
//! On a tie the smallest value wins.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{frequency, runner, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_most_frequent_table";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    let (value, repeat) = frequency::most_frequent_table(&values, settings.value_limit)?
        .ok_or_else(|| DrillError::too_few(1, 0))?;
    writeln!(out, "{value} repeated {repeat} times")?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
