use log::Level;
use thiserror::Error;

pub type CommandResult<T> = Result<T, CommandError>;

/// Failure to build a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid table dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: i32, height: i32 },
}

/// Per-line command failures.
///
/// None of these ever escape [`CommandInterpreter::execute`](crate::CommandInterpreter::execute);
/// they are turned into a rejected outcome plus a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid PLACE arguments: {0}")]
    MalformedCommand(String),

    #[error("unknown orientation: {0}")]
    UnknownOrientation(String),

    #[error("coordinate is not an integer: {0}")]
    NonIntegerCoordinate(String),

    #[error("placement at {x},{y} is off the table")]
    OutOfBounds { x: i64, y: i64 },

    #[error("unknown command: {0}")]
    UnrecognizedCommand(String),
}

impl CommandError {
    /// Severity the diagnostics sink receives for this failure.
    ///
    /// Decode failures inside PLACE arguments are errors, everything else a warning.
    pub fn level(&self) -> Level {
        match self {
            Self::UnknownOrientation(_) | Self::NonIntegerCoordinate(_) => Level::Error,
            Self::MalformedCommand(_) | Self::OutOfBounds { .. } | Self::UnrecognizedCommand(_) => {
                Level::Warn
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failures_are_errors() {
        assert_eq!(CommandError::UnknownOrientation("UP".into()).level(), Level::Error);
        assert_eq!(CommandError::NonIntegerCoordinate("A".into()).level(), Level::Error);
    }

    #[test]
    fn shape_and_bounds_failures_are_warnings() {
        assert_eq!(CommandError::MalformedCommand("1,2".into()).level(), Level::Warn);
        assert_eq!(CommandError::OutOfBounds { x: 6, y: 6 }.level(), Level::Warn);
        assert_eq!(CommandError::UnrecognizedCommand("JUMP".into()).level(), Level::Warn);
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = CommandError::UnrecognizedCommand("JUMP".into());
        assert_eq!(err.to_string(), "unknown command: JUMP");

        let err = GridError::InvalidDimension { width: 0, height: 5 };
        assert!(err.to_string().contains("0x5"));
    }
}
