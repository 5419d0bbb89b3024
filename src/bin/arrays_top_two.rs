//! Largest and second largest of n distinct values.
//!
//! Run with: echo "5  10 20 3 30 7" | cargo run --bin arrays_top_two

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{runner, scan, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_top_two";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    let (max1, max2) = scan::top_two(&values).ok_or_else(|| DrillError::too_few(2, values.len()))?;
    writeln!(out, "{max1} {max2}")?;
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
    fn test_prints_largest_then_second() {
        assert_eq!(output_for("5  10 20 3 30 7").unwrap(), "30 20\n");
        assert_eq!(output_for("3  10 20 15").unwrap(), "20 15\n");
    }

    #[test]
    fn test_single_value_is_too_few() {
        assert!(matches!(
            output_for("1 5"),
            Err(DrillError::TooFew { needed: 2, got: 1 })
        ));
    }
}
