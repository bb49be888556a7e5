//! Sensor packages and dispatch to workout records.
//!
//! A package is an activity code plus positional readings. The reading order
//! follows the record fields:
//!
//! | Code  | Values                                                        |
//! |-------|---------------------------------------------------------------|
//! | `RUN` | action count, duration (h), weight (kg)                       |
//! | `WLK` | action count, duration (h), weight (kg), height (cm)          |
//! | `SWM` | action count, duration (h), weight (kg), pool (m), pool count |

pub mod parser;

pub use parser::parse_package;

use tracing::debug;

use crate::error::TrainingError;
use crate::training::{ActivityKind, Running, SportsWalking, Swimming, Workout};

/// Raw package as read from a sensor line.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            values,
        }
    }

    pub fn read(&self) -> Result<Workout, TrainingError> {
        read_package(&self.code, &self.values)
    }
}

/// Build a workout record from an activity code and positional values.
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout, TrainingError> {
    let kind = ActivityKind::from_code(code).ok_or_else(|| TrainingError::UnknownActivity {
        code: code.to_string(),
    })?;

    if values.len() != kind.arity() {
        return Err(TrainingError::InvalidArgCount {
            activity: kind,
            expected: kind.arity() as u32,
            got: values.len() as u32,
        });
    }

    if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(TrainingError::InvalidValue {
            field: field_name(kind, index).to_string(),
            value: *value,
        });
    }

    let action_count = whole_count("action_count", values[0])?;
    let duration_h = values[1];
    if duration_h <= 0.0 {
        return Err(TrainingError::NonPositiveDuration { value: duration_h });
    }
    let weight_kg = values[2];

    let workout: Workout = match kind {
        ActivityKind::Running => Running::new(action_count, duration_h, weight_kg).into(),
        ActivityKind::SportsWalking => {
            SportsWalking::new(action_count, duration_h, weight_kg, values[3]).into()
        }
        ActivityKind::Swimming => {
            let pool_count = whole_count("pool_count", values[4])?;
            Swimming::new(action_count, duration_h, weight_kg, values[3], pool_count).into()
        }
    };

    debug!(code, ?values, activity = %kind, "read package");
    Ok(workout)
}

fn field_name(kind: ActivityKind, index: usize) -> &'static str {
    match (kind, index) {
        (_, 0) => "action_count",
        (_, 1) => "duration_h",
        (_, 2) => "weight_kg",
        (ActivityKind::SportsWalking, 3) => "height_cm",
        (ActivityKind::Swimming, 3) => "pool_length_m",
        (ActivityKind::Swimming, 4) => "pool_count",
        _ => "value",
    }
}

fn whole_count(field: &str, value: f64) -> Result<u32, TrainingError> {
    if value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(TrainingError::InvalidValue {
            field: field.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::Training;

    #[test]
    fn test_read_each_activity() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(
            workout,
            Workout::Swimming(Swimming::new(720, 1.0, 80.0, 25.0, 40))
        );

        let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(workout, Workout::Running(Running::new(15_000, 1.0, 75.0)));

        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(
            workout,
            Workout::SportsWalking(SportsWalking::new(9_000, 1.0, 75.0, 180.0))
        );
        assert_eq!(workout.kind(), ActivityKind::SportsWalking);
    }

    #[test]
    fn test_unknown_activity() {
        let result = read_package("XYZ", &[1.0, 1.0, 1.0]);
        assert_eq!(
            result,
            Err(TrainingError::UnknownActivity {
                code: "XYZ".to_string()
            })
        );

        // Codes are case-sensitive
        assert!(matches!(
            read_package("run", &[15000.0, 1.0, 75.0]),
            Err(TrainingError::UnknownActivity { .. })
        ));
    }

    #[test]
    fn test_wrong_value_count() {
        let result = read_package("SWM", &[720.0, 1.0, 80.0]);
        assert_eq!(
            result,
            Err(TrainingError::InvalidArgCount {
                activity: ActivityKind::Swimming,
                expected: 5,
                got: 3,
            })
        );

        let result = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]);
        assert!(matches!(
            result,
            Err(TrainingError::InvalidArgCount {
                expected: 3,
                got: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_counts() {
        let result = read_package("RUN", &[150.5, 1.0, 75.0]);
        assert_eq!(
            result,
            Err(TrainingError::InvalidValue {
                field: "action_count".to_string(),
                value: 150.5,
            })
        );

        let result = read_package("RUN", &[-1.0, 1.0, 75.0]);
        assert!(matches!(result, Err(TrainingError::InvalidValue { .. })));

        let result = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 4.5]);
        assert!(matches!(
            result,
            Err(TrainingError::InvalidValue { ref field, .. }) if field == "pool_count"
        ));
    }

    #[test]
    fn test_non_finite_values() {
        let result = read_package("WLK", &[9000.0, 1.0, 75.0, f64::NAN]);
        assert!(matches!(
            result,
            Err(TrainingError::InvalidValue { ref field, .. }) if field == "height_cm"
        ));

        let result = read_package("RUN", &[15000.0, f64::INFINITY, 75.0]);
        assert!(matches!(
            result,
            Err(TrainingError::InvalidValue { ref field, .. }) if field == "duration_h"
        ));
    }

    #[test]
    fn test_non_positive_duration() {
        let result = read_package("RUN", &[15000.0, 0.0, 75.0]);
        assert_eq!(result, Err(TrainingError::NonPositiveDuration { value: 0.0 }));

        let result = read_package("SWM", &[720.0, -1.0, 80.0, 25.0, 40.0]);
        assert!(matches!(
            result,
            Err(TrainingError::NonPositiveDuration { .. })
        ));
    }

    #[test]
    fn test_package_read() {
        let package = Package::new("RUN", vec![15000.0, 1.0, 75.0]);
        let workout = package.read().unwrap();
        assert!((workout.distance() - 9.75).abs() < 1e-9);
    }
}
