use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::output::join_spaced;
use drills::{runner, transform, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_reverse";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let mut values = input.read_counted(settings.capacity)?;
    transform::reverse_in_place(&mut values);
    writeln!(out, "{}", join_spaced(values.iter()))?;
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}
