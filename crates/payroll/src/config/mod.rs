use std::env;
use std::fmt;

use crate::workflows::payroll::{ValidationProfile, DEFAULT_CAPACITY};

/// Top-level configuration for the payroll desk.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let profile_raw = env::var("PAYROLL_PROFILE").unwrap_or_else(|_| "strict".to_string());
        let profile = ValidationProfile::from_label(&profile_raw)
            .ok_or(ConfigError::InvalidProfile { value: profile_raw })?;

        let capacity = match env::var("PAYROLL_CAPACITY") {
            Ok(raw) => parse_capacity(&raw)?,
            Err(_) => DEFAULT_CAPACITY,
        };

        let log_level = env::var("PAYROLL_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            session: SessionConfig { profile, capacity },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Parses a registry capacity; shared by `PAYROLL_CAPACITY` and the CLI flag.
pub fn parse_capacity(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(ConfigError::InvalidCapacity {
            value: raw.to_string(),
        }),
    }
}

/// Rules for the interactive session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub profile: ValidationProfile,
    pub capacity: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidProfile { value: String },
    InvalidCapacity { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidProfile { value } => write!(
                f,
                "PAYROLL_PROFILE must be 'strict' or 'decimal' (got '{value}')"
            ),
            ConfigError::InvalidCapacity { value } => write!(
                f,
                "registry capacity must be a positive integer (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
