use crate::config::TelemetryConfig;
use std::env;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    Filter { directives: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { directives, .. } => {
                write!(f, "invalid log filter '{directives}'")
            }
            TelemetryError::Subscriber(err) => write!(f, "unable to install subscriber: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Log filter for the process: valid `RUST_LOG` directives win over the
/// configured level.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    let overrides = env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_filter(overrides.as_deref(), &config.log_level)
}

fn resolve_filter(overrides: Option<&str>, configured: &str) -> Result<EnvFilter, TelemetryError> {
    if let Some(directives) = overrides.filter(|directives| !directives.trim().is_empty()) {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return Ok(filter);
        }
    }

    EnvFilter::try_new(configured).map_err(|source| TelemetryError::Filter {
        directives: configured.to_string(),
        source,
    })
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level_applies_without_overrides() {
        let filter = resolve_filter(None, "warn").expect("level parses");
        assert_eq!(filter.to_string(), "warn");

        let blank = resolve_filter(Some("  "), "career_fit=debug").expect("level parses");
        assert_eq!(blank.to_string(), "career_fit=debug");
    }

    #[test]
    fn valid_overrides_win() {
        let filter = resolve_filter(Some("career_fit=trace"), "info").expect("override parses");
        assert_eq!(filter.to_string(), "career_fit=trace");
    }

    #[test]
    fn invalid_overrides_fall_back_to_configured_level() {
        let filter = resolve_filter(Some("career_fit=loudest"), "info").expect("fallback parses");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn invalid_configured_level_is_reported() {
        let error = resolve_filter(None, "career_fit=loudest").expect_err("level rejected");
        assert_eq!(
            error.to_string(),
            "invalid log filter 'career_fit=loudest'"
        );
    }
}
