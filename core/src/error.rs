use thiserror::Error;

use crate::training::ActivityKind;

/// Error type for package parsing and workout dispatch.
#[derive(Error, Debug, Clone, PartialEq, uniffi::Error)]
pub enum TrainingError {
    #[error("unknown activity: {code}")]
    UnknownActivity { code: String },

    #[error("invalid value count for {activity}: expected {expected}, got {got}")]
    InvalidArgCount {
        activity: ActivityKind,
        expected: u32,
        got: u32,
    },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: f64 },

    #[error("duration must be positive, got {value}")]
    NonPositiveDuration { value: f64 },

    #[error("empty package")]
    EmptyPackage,

    #[error("parse error at position {position}: {message}")]
    ParseError { position: u32, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_error_display() {
        let err = TrainingError::UnknownActivity {
            code: "XYZ".to_string(),
        };
        assert_eq!(err.to_string(), "unknown activity: XYZ");

        let err = TrainingError::InvalidArgCount {
            activity: ActivityKind::Swimming,
            expected: 5,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid value count for Swimming: expected 5, got 3"
        );

        let err = TrainingError::NonPositiveDuration { value: 0.0 };
        assert_eq!(err.to_string(), "duration must be positive, got 0");

        let err = TrainingError::ParseError {
            position: 4,
            message: "expected a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "parse error at position 4: expected a number"
        );
    }
}
