use super::{ActivityKind, Training, TrainingBase, MIN_IN_H};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
/// km/h to m/s, as used by the walking calorie formula.
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

/// Sports walking workout. Calories also depend on the walker's height.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub base: TrainingBase,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action_count: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: TrainingBase::new(action_count, duration_h, weight_kg),
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
    }

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.base.weight_kg;
        let speed_m_s = (self.distance() / self.base.duration_h) * KMH_IN_MSEC;
        let height_m = self.height_cm / CM_IN_M;

        (CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_m_s.powi(2) / height_m) * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * (self.base.duration_h * MIN_IN_H)
    }
}
