//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{Config, LogFormat};
use crate::error::AppError;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` semantics apply to `config.log_level`. Fails if a subscriber
/// is already installed.
pub fn init(config: &Config) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let json = config.log_format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .try_init()?;

    Ok(())
}
