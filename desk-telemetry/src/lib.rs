//! Observability setup for Prompt Desk hosts.

#![warn(missing_docs, clippy::pedantic)]

use desk_config::SessionConfig;
use tracing_subscriber::EnvFilter;

/// Options for the global `tracing` subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub default_filter: String,
    /// Whether to print the event target (module path).
    pub with_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_owned(),
            with_target: false,
        }
    }
}

impl From<&SessionConfig> for TelemetryConfig {
    fn from(config: &SessionConfig) -> Self {
        Self {
            default_filter: config.log_filter.clone(),
            ..Self::default()
        }
    }
}

impl TelemetryConfig {
    /// Resolves the filter: `RUST_LOG` wins, then the configured directive,
    /// then plain `info` if the directive does not parse.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.default_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Installs a formatted subscriber as the global default.
///
/// Returns `false` if a global subscriber was already installed, in which case
/// nothing changes.
pub fn init_tracing(config: &TelemetryConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_target(config.with_target)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_supplies_filter() {
        let mut session = SessionConfig::default();
        session.log_filter = "desk_session=debug".to_owned();
        let config = TelemetryConfig::from(&session);
        assert_eq!(config.default_filter, "desk_session=debug");
        assert!(!config.with_target);
    }

    #[test]
    fn second_init_is_harmless() {
        let config = TelemetryConfig::default();
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
