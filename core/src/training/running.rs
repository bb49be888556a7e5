use super::{ActivityKind, Training, TrainingBase, M_IN_KM, MIN_IN_H};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

/// Running workout, measured in steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub base: TrainingBase,
}

impl Running {
    pub fn new(action_count: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            base: TrainingBase::new(action_count, duration_h, weight_kg),
        }
    }
}

impl Training for Running {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * self.base.weight_kg
            / M_IN_KM
            * (self.base.duration_h * MIN_IN_H)
    }
}
