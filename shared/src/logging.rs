//! Process tracing setup and contextual log helpers
//!
//! This is the server's operational log (stdout, filtered by level). The
//! application's own audit trail lives in [`crate::logger`].

use chrono::{DateTime, Utc};
use std::str::FromStr;
use tracing::{error, info};

use crate::errors::{SharedError, SharedResult};

/// Targets that follow the configured level
const SITE_TARGETS: [&str; 3] = ["website", "shared", "tower_http"];

/// Build the `EnvFilter` directive string for a base level
pub fn filter_directives(base_level: &str) -> SharedResult<String> {
    let level = tracing::Level::from_str(base_level).map_err(|_| SharedError::InvalidConfig {
        field: "log_level".to_string(),
        value: base_level.to_string(),
    })?;
    let level = level.to_string().to_lowercase();

    Ok(SITE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(","))
}

/// Initialize the stdout tracing subscriber with an optional base level (default `info`)
pub fn init_tracing_with_level(log_level: Option<&str>) -> SharedResult<()> {
    use tracing_subscriber::{EnvFilter, fmt};

    let directives = filter_directives(log_level.unwrap_or("info"))?;

    fmt()
        .with_env_filter(EnvFilter::new(&directives))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| SharedError::InvalidConfig {
            field: "tracing".to_string(),
            value: e.to_string(),
        })
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Component-aware info logging
#[macro_export]
macro_rules! site_info {
    ($component:expr, $($arg:tt)*) => {
        tracing::info!(
            component = $component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Component-aware warning logging
#[macro_export]
macro_rules! site_warn {
    ($component:expr, $($arg:tt)*) => {
        tracing::warn!(
            component = $component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Component-aware error logging
#[macro_export]
macro_rules! site_error {
    ($component:expr, $($arg:tt)*) => {
        tracing::error!(
            component = $component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &str, details: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: &str, reason: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: &str, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: &str, message: &str) {
    info!(
        component = component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}
