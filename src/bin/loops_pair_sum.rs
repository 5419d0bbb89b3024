//! Read N, M and SUM; list every A + B == SUM with 1 <= A <= N, 1 <= B <= M.
//!
//! Run with: echo "10 10 10" | cargo run --bin loops_pair_sum

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{counting, runner, DrillResult, Scanner, Settings};

const NAME: &str = "loops_pair_sum";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    _settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let n: i64 = input.next()?;
    let m: i64 = input.next()?;
    let sum: i64 = input.next()?;

    let mut steps = 0;
    for (a, b) in counting::pairs_with_sum(n, m, sum) {
        writeln!(out, "{a}+{b}")?;
        steps += 1;
    }
    writeln!(out, "steps: {steps}")?;
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
    fn test_lists_pairs_then_steps() {
        let mut expected: String = (1..=9).map(|a| format!("{a}+{}\n", 10 - a)).collect();
        expected.push_str("steps: 9\n");
        assert_eq!(output_for("10 10 10").unwrap(), expected);
    }

    #[test]
    fn test_small_grid() {
        assert_eq!(output_for("3 10 4").unwrap(), "1+3\n2+2\n3+1\nsteps: 3\n");
        assert_eq!(output_for("3 3 99").unwrap(), "steps: 0\n");
    }
}
