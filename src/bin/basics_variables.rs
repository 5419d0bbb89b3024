use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{basics, runner, DrillResult, Scanner, Settings};

const NAME: &str = "basics_variables";

fn drill<R: BufRead, W: Write>(
    _input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    for line in basics::variable_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_for(input: &str) -> DrillResult<String> {
        runner::run_on_str(NAME, input, &Settings::default(), drill)
    }

    #[test]
    fn test_listing() {
        assert_eq!(
            output_for("").unwrap(),
            "25\n40\n-----------------\n10 20 30\n-----------------\n"
        );
    }
}
