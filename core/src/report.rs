//! Summary line for a finished workout.

use std::fmt;

/// Computed statistics for one workout, ready to print.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct InfoMessage {
    /// Workout type name (`Running`, `SportsWalking`, `Swimming`)
    pub training_type: String,
    /// Duration in hours
    pub duration: f64,
    /// Distance in kilometres
    pub distance: f64,
    /// Mean speed in km/h
    pub speed: f64,
    /// Energy spent in kilocalories
    pub calories: f64,
}

impl InfoMessage {
    /// Render the summary with every number to three decimals.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories,
        )
    }
}
