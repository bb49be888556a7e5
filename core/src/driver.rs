//! Runs packages through dispatch and reporting.

use tracing::info;

use crate::error::TrainingError;
use crate::package::{read_package, Package};
use crate::training::Training;

/// Reference packages processed when no input is given.
pub const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Compute and format the summary line for one package.
pub fn summarize(code: &str, values: &[f64]) -> Result<String, TrainingError> {
    let workout = read_package(code, values)?;
    let info = workout.training_info();
    info!(
        training_type = %info.training_type,
        calories = info.calories,
        "workout summarized"
    );
    Ok(info.message())
}

/// Summaries for [`SAMPLE_PACKAGES`], in order.
pub fn sample_summaries() -> Result<Vec<String>, TrainingError> {
    SAMPLE_PACKAGES
        .iter()
        .map(|(code, values)| summarize(code, values))
        .collect()
}

/// Summaries for parsed packages, in order. Stops at the first failure.
pub fn summarize_all(packages: &[Package]) -> Result<Vec<String>, TrainingError> {
    packages
        .iter()
        .map(|p| summarize(&p.code, &p.values))
        .collect()
}
