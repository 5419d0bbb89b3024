//! Most repeated value when values may be negative (default range -500..=270).
//!
//! Run with: echo "7  -1 2 -1 3 -1 5 5" | cargo run --bin arrays_shifted_frequency

use std::io::{BufRead, Write};
use std::process::ExitCode;

use drills::{frequency, runner, DrillError, DrillResult, Scanner, Settings};

const NAME: &str = "arrays_shifted_frequency";

fn drill<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    settings: &Settings,
    out: &mut W,
) -> DrillResult<()> {
    let values = input.read_counted(settings.capacity)?;
    let (value, repeat) =
        frequency::shifted_most_frequent(&values, settings.shift_low, settings.shift_high)?
            .ok_or_else(|| DrillError::too_few(1, 0))?;
    writeln!(out, "{value} has repeated {repeat} times")?;
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
    fn test_negative_value_wins() {
        assert_eq!(output_for("7  -1 2 -1 3 -1 5 5").unwrap(), "-1 has repeated 3 times\n");
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(output_for("2  -500 270").unwrap(), "-500 has repeated 1 times\n");
        assert!(matches!(
            output_for("1  -501"),
            Err(DrillError::OutOfRange { value: -501, low: -500, high: 270 })
        ));
    }
}
