use super::{ActivityKind, Training, TrainingBase, M_IN_KM};

/// Distance covered per stroke, in metres.
pub const STROKE_LENGTH_M: f64 = 1.38;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Pool swimming workout. `action_count` counts strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub base: TrainingBase,
    /// Pool length in metres
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_count: u32,
}

impl Swimming {
    pub fn new(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_count: u32,
    ) -> Self {
        Self {
            base: TrainingBase::new(action_count, duration_h, weight_kg),
            pool_length_m,
            pool_count,
        }
    }
}

impl Training for Swimming {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn step_length_m(&self) -> f64 {
        STROKE_LENGTH_M
    }

    /// Speed from pool laps; strokes do not contribute.
    fn mean_speed(&self) -> f64 {
        self.pool_length_m * self.pool_count as f64 / M_IN_KM / self.base.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.base.weight_kg
            * self.base.duration_h
    }
}
