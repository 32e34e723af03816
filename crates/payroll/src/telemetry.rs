use crate::config::TelemetryConfig;
use std::env;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Where the active log directive came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    RustLog,
    PayrollLogLevel,
}

impl FilterSource {
    fn variable(self) -> &'static str {
        match self {
            FilterSource::RustLog => "RUST_LOG",
            FilterSource::PayrollLogLevel => "PAYROLL_LOG_LEVEL",
        }
    }
}

#[derive(Debug)]
pub enum TelemetryError {
    InvalidDirective {
        source_var: FilterSource,
        directive: String,
        source: ParseError,
    },
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidDirective {
                source_var,
                directive,
                ..
            } => write!(
                f,
                "{} holds an invalid log directive '{directive}'",
                source_var.variable()
            ),
            TelemetryError::AlreadyInstalled(err) => {
                write!(f, "could not install the log subscriber: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidDirective { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Picks the log directive: a non-empty `RUST_LOG` wins over the configured
/// `PAYROLL_LOG_LEVEL`. A malformed `RUST_LOG` is an error, not skipped.
pub fn build_filter(
    rust_log: Option<&str>,
    config: &TelemetryConfig,
) -> Result<EnvFilter, TelemetryError> {
    let (source_var, directive) = match rust_log.map(str::trim) {
        Some(raw) if !raw.is_empty() => (FilterSource::RustLog, raw),
        _ => (FilterSource::PayrollLogLevel, config.log_level.trim()),
    };

    EnvFilter::try_new(directive).map_err(|source| TelemetryError::InvalidDirective {
        source_var,
        directive: directive.to_string(),
        source,
    })
}

/// Installs the global subscriber. Events go to stderr so the menu and
/// prompts on stdout stay readable.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let rust_log = env::var("RUST_LOG").ok();
    let filter = build_filter(rust_log.as_deref(), config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    fn configured(level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: level.to_string(),
        }
    }

    #[test]
    fn configured_level_applies_without_rust_log() {
        let filter = build_filter(None, &configured("debug")).expect("valid level");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = build_filter(Some("  "), &configured("info")).expect("blank RUST_LOG ignored");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn rust_log_overrides_configured_level() {
        let filter =
            build_filter(Some("payroll=trace"), &configured("warn")).expect("valid directive");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn malformed_directives_name_their_variable() {
        let err = build_filter(None, &configured("payroll=notalevel"))
            .expect_err("bad configured level");
        assert!(err.to_string().starts_with("PAYROLL_LOG_LEVEL holds"));

        let err = build_filter(Some("payroll=notalevel"), &configured("warn"))
            .expect_err("bad RUST_LOG");
        assert!(matches!(
            err,
            TelemetryError::InvalidDirective {
                source_var: FilterSource::RustLog,
                ..
            }
        ));
    }
}
