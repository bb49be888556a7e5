//! Workout formulas.
//!
//! Each activity is a plain record implementing [`Training`]. Distance and
//! mean speed have shared default formulas; calories must be supplied by
//! every activity.
//!
//! # Example
//!
//! ```
//! use workout_compute::training::{Running, Training};
//!
//! let run = Running::new(15_000, 1.0, 75.0);
//! assert!((run.distance() - 9.75).abs() < 1e-9);
//! assert!((run.spent_calories() - 797.805).abs() < 1e-6);
//! ```

pub mod running;
pub mod swimming;
pub mod walking;

use std::fmt;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::report::InfoMessage;

/// Default distance covered per action (one step), in metres.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Kind of workout, selected by a three-letter activity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum ActivityKind {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    /// Look up an activity by its sensor code (`RUN`, `WLK`, `SWM`).
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Type name shown in reports.
    pub fn name(&self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package for this activity carries.
    pub fn arity(&self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Readings shared by every activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    /// Steps taken or strokes made
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_h: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl TrainingBase {
    pub fn new(action_count: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_h,
            weight_kg,
        }
    }
}

/// Statistics every workout can compute.
///
/// Formulas divide by the duration, so `duration_h` is expected to be
/// positive. Records built through [`crate::package::read_package`] are
/// checked; records built directly are not.
pub trait Training {
    fn kind(&self) -> ActivityKind;

    fn base(&self) -> &TrainingBase;

    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance covered in kilometres.
    fn distance(&self) -> f64 {
        self.base().action_count as f64 * self.step_length_m() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.base().duration_h
    }

    /// Energy spent in kilocalories.
    fn spent_calories(&self) -> f64;

    fn training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().name().to_string(),
            duration: self.base().duration_h,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// A workout of any kind, as produced by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> ActivityKind {
        self.as_training().kind()
    }

    fn base(&self) -> &TrainingBase {
        self.as_training().base()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Workout::SportsWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_codes() {
        assert_eq!(ActivityKind::from_code("RUN"), Some(ActivityKind::Running));
        assert_eq!(
            ActivityKind::from_code("WLK"),
            Some(ActivityKind::SportsWalking)
        );
        assert_eq!(ActivityKind::from_code("SWM"), Some(ActivityKind::Swimming));
        assert_eq!(ActivityKind::from_code("run"), None);
        assert_eq!(ActivityKind::from_code("XYZ"), None);

        for kind in ActivityKind::ALL {
            assert_eq!(ActivityKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_activity_names_and_arity() {
        assert_eq!(ActivityKind::Running.to_string(), "Running");
        assert_eq!(ActivityKind::SportsWalking.to_string(), "SportsWalking");
        assert_eq!(ActivityKind::Swimming.to_string(), "Swimming");

        assert_eq!(ActivityKind::Running.arity(), 3);
        assert_eq!(ActivityKind::SportsWalking.arity(), 4);
        assert_eq!(ActivityKind::Swimming.arity(), 5);
    }

    #[test]
    fn test_distance_monotonic_in_actions() {
        let mut previous = -1.0;
        for action_count in [0, 1, 100, 5_000, 15_000, 100_000] {
            let distance = Running::new(action_count, 1.0, 75.0).distance();
            assert!(distance > previous);
            assert!((distance - action_count as f64 * 0.65 / 1000.0).abs() < 1e-12);
            previous = distance;
        }
    }

    #[test]
    fn test_workout_delegates_to_variant() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40);
        let workout = Workout::from(swim.clone());

        assert_eq!(workout.kind(), ActivityKind::Swimming);
        assert_eq!(workout.step_length_m(), swim.step_length_m());
        assert_eq!(workout.mean_speed(), swim.mean_speed());
        assert_eq!(workout.spent_calories(), swim.spent_calories());
        assert_eq!(workout.training_info(), swim.training_info());
    }

    #[test]
    fn test_training_info_fields() {
        let info = SportsWalking::new(9_000, 1.0, 75.0, 180.0).training_info();

        assert_eq!(info.training_type, "SportsWalking");
        assert_eq!(info.duration, 1.0);
        assert!((info.distance - 5.85).abs() < 1e-9);
        assert!((info.speed - 5.85).abs() < 1e-9);
        assert!(info.calories > 0.0);
    }
}
