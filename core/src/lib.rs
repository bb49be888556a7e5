//! Workout statistics from raw sensor packages.
//!
//! ```
//! use workout_compute::{read_package, Training};
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
//! assert_eq!(
//!     workout.training_info().message(),
//!     "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
//!      Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
//! );
//! ```

pub mod driver;
pub mod error;
pub mod ffi;
pub mod package;
pub mod report;
pub mod training;

uniffi::setup_scaffolding!();

pub use driver::{sample_summaries, summarize, summarize_all, SAMPLE_PACKAGES};
pub use error::TrainingError;
pub use package::{parse_package, read_package, Package};
pub use report::InfoMessage;
pub use training::{
    ActivityKind, Running, SportsWalking, Swimming, Training, TrainingBase, Workout,
};
