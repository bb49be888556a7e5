//! Functions exported to foreign-language bindings.

use crate::error::TrainingError;
use crate::package::{parse_package, read_package};
use crate::report::InfoMessage;
use crate::training::Training;

/// Compute the statistics for one package.
#[uniffi::export]
pub fn summarize_package(code: String, values: Vec<f64>) -> Result<InfoMessage, TrainingError> {
    Ok(read_package(&code, &values)?.training_info())
}

/// Compute and format the summary line for one package.
#[uniffi::export]
pub fn format_package(code: String, values: Vec<f64>) -> Result<String, TrainingError> {
    crate::driver::summarize(&code, &values)
}

/// Parse a textual package and compute its statistics.
#[uniffi::export]
pub fn parse_and_summarize(input: String) -> Result<InfoMessage, TrainingError> {
    let package = parse_package(&input)?;
    Ok(package.read()?.training_info())
}

/// Code, type name and value count of every supported activity.
#[uniffi::export]
pub fn supported_activities() -> Vec<ActivityInfo> {
    crate::training::ActivityKind::ALL
        .into_iter()
        .map(|kind| ActivityInfo {
            kind,
            code: kind.code().to_string(),
            name: kind.name().to_string(),
            value_count: kind.arity() as u32,
        })
        .collect()
}

/// Description of a supported activity.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct ActivityInfo {
    pub kind: crate::training::ActivityKind,
    pub code: String,
    pub name: String,
    pub value_count: u32,
}
