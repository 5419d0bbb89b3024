//! Count (a, b, c, d) in 1..=200 with a + b == c + d: four loops, then three.

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::counting;
use drills::{runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_quadruples";

const BOUND: i64 = 200;

fn report<W: Write>(bound: i64, out: &mut W) -> DrillResult<()> {
    writeln!(out, "{}", counting::count_quadruples_naive(bound))?;
    writeln!(out, "{}", counting::count_quadruples(bound))?;
    Ok(())
}

fn drill<R: BufRead, W: Write>(
    _input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    report(BOUND, out)
}

fn main() -> ExitCode {
    runner::run(NAME, drill)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_counts_printed() {
        let mut out = Vec::new();
        report(5, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "85\n85\n");
    }
}
