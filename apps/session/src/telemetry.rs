//! # Telemetry
//!
//! Installs the global tracing subscriber for a session host.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - Show debug messages
//! - `RUST_LOG=tote_store=trace` - Trace the cart store only
//! - Unset: `[logging] filter` from the config file, else [`DEFAULT_FILTER`]

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingSettings;

/// Filter used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_FILTER: &str = "info,tote=debug,sqlx=warn";

/// Builds the filter: `RUST_LOG` first, then the configured directives.
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(settings.filter.as_deref().unwrap_or(DEFAULT_FILTER))
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// Returns false if a global subscriber was already installed, in which case
/// the existing one keeps running.
pub fn init_tracing(settings: &LoggingSettings) -> bool {
    let builder = fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(io::stdout);

    let result = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.is_ok()
}
