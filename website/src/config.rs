//! Site configuration
//!
//! Built from command line arguments in `main` and validated before the
//! server starts.

use clap::ValueEnum;
use shared::LoggerConfig;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{WebsiteError, WebsiteResult};

/// Simulated latency of a contact form send
pub const DEFAULT_SUBMIT_LATENCY: Duration = Duration::from_millis(1000);

/// Default site logger capacity
pub const DEFAULT_LOG_CAPACITY: usize = shared::logger::DEFAULT_LOG_CAPACITY;

/// Development or production behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuildMode {
    Dev,
    Prod,
}

impl BuildMode {
    /// Mode implied by the build profile
    pub fn from_build() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Dev
        } else {
            BuildMode::Prod
        }
    }

    pub fn is_development(self) -> bool {
        self == BuildMode::Dev
    }
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_address: SocketAddr,
    pub mode: BuildMode,
    pub log_level: String,
    pub static_dir: PathBuf,
    pub submit_latency: Duration,
    pub log_capacity: usize,
}

impl SiteConfig {
    pub fn validate(&self) -> WebsiteResult<()> {
        if self.log_capacity == 0 {
            return Err(WebsiteError::config("log_capacity", self.log_capacity));
        }
        shared::logging::filter_directives(&self.log_level)?;
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.mode.is_development()
    }

    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            dev_mode: self.is_development(),
            capacity: self.log_capacity,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080),
            mode: BuildMode::from_build(),
            log_level: "info".to_string(),
            static_dir: PathBuf::from("./static"),
            submit_latency: DEFAULT_SUBMIT_LATENCY,
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }
}
