use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::advocacy::{CustomerDataError, ReportError, ScoringConfigError};

/// Fatal errors surfaced at the command-line boundary. Any of these aborts the
/// run before recommendations are emitted.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("scoring configuration error: {0}")]
    ScoringConfig(#[from] ScoringConfigError),
    #[error("customer data error: {0}")]
    CustomerData(#[from] CustomerDataError),
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}
