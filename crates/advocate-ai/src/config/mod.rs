use std::env;
use std::path::PathBuf;

pub use crate::workflows::advocacy::DEFAULT_TOP_N;

pub const DEFAULT_SCORING_CONFIG_PATH: &str = "config/scoring-parameters.json";
pub const DEFAULT_CUSTOMER_DATA_PATH: &str = "data/sample-customer-data.csv";

/// Distinguishes runtime behavior for different stages of a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for a scoring run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringRunConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("ADVOCACY_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let config_path = env::var("ADVOCACY_CONFIG_PATH")
            .unwrap_or_else(|_| DEFAULT_SCORING_CONFIG_PATH.to_string());
        let data_path = env::var("ADVOCACY_DATA_PATH")
            .unwrap_or_else(|_| DEFAULT_CUSTOMER_DATA_PATH.to_string());
        let top_n = match env::var("ADVOCACY_TOP_N") {
            Ok(raw) => parse_top_n(&raw)?,
            Err(_) => DEFAULT_TOP_N,
        };

        let log_level = env::var("ADVOCACY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringRunConfig {
                config_path: PathBuf::from(config_path),
                data_path: PathBuf::from(data_path),
                top_n,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Inputs and operational parameters for one batch run.
#[derive(Debug, Clone)]
pub struct ScoringRunConfig {
    pub config_path: PathBuf,
    pub data_path: PathBuf,
    pub top_n: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ADVOCACY_TOP_N must be a positive integer, got '{value}'")]
    InvalidTopN { value: String },
}

fn parse_top_n(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidTopN {
            value: raw.to_string(),
        }),
    }
}
