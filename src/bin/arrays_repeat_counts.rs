use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{frequency, runner, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_repeat_counts";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    for (value, count) in frequency::repeat_counts(&values) {
        writeln!(out, "{value} repeated {count} times")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
