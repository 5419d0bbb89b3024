//! Count A + B <= C with 1 <= A <= N, A <= B <= M, 1 <= C <= W.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{counting, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_triples";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n: i64 = input.next()?;
    let m: i64 = input.next()?;
    let w: i64 = input.next()?;
    writeln!(out, "steps: {}", counting::count_triples(n, m, w))?;
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
    fn test_triples() {
        assert_eq!(output_for("100 200 20").unwrap(), "steps: 715\n");
    }
}
