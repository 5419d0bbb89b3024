use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    #[error("Input ended early: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Could not read '{token}' as {expected}")]
    Parse { token: String, expected: String },

    #[error("Requested {requested} values but the buffer holds at most {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("Value {value} is outside the table range [{low}, {high}]")]
    OutOfRange { value: i64, low: i64, high: i64 },

    #[error("Need at least {needed} values, got {got}")]
    TooFew { needed: usize, got: usize },

    #[error("Sequence is not ascending at index {index}")]
    NotAscending { index: usize },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error("Invalid settings: {0}")]
    Settings(String),
}

impl DrillError {
    pub fn unexpected_eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }

    pub fn parse(token: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Parse {
            token: token.into(),
            expected: expected.into(),
        }
    }

    pub fn too_few(needed: usize, got: usize) -> Self {
        Self::TooFew { needed, got }
    }

    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings(message.into())
    }
}

pub type DrillResult<T> = Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = DrillError::CapacityExceeded {
            requested: 1200,
            capacity: 1000,
        };
        assert_eq!(
            err.to_string(),
            "Requested 1200 values but the buffer holds at most 1000"
        );

        let err = DrillError::parse("abc", "i64");
        assert_eq!(err.to_string(), "Could not read 'abc' as i64");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let err: DrillError = io_err.into();
        assert!(matches!(err, DrillError::Io(_)));
    }
}
