//! Application configuration loaded from environment variables.

use crate::error::AppError;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Runtime configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `DATABASE_URL` — PostgreSQL connection string; unset selects the
///   in-memory repositories
/// - `DATABASE_MAX_CONNECTIONS` — pool size (default: `5`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `pretty` or `json` (default: `pretty`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// unset keys. Set but malformed values are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| AppError::InvalidConfig {
                    key: "DATABASE_MAX_CONNECTIONS",
                    value: raw,
                })?,
            None => defaults.max_connections,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "pretty" | "text" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => {
                    return Err(AppError::InvalidConfig {
                        key: "LOG_FORMAT",
                        value: raw,
                    });
                }
            },
            None => defaults.log_format,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            max_connections,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: 5,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
