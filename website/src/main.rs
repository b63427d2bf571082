//! Website entry point

use clap::Parser;
use shared::{SiteLogger, logging, site_info};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use website::{BuildMode, SiteConfig, SiteState, WebSite, WebsiteResult};

#[derive(Parser, Debug)]
#[command(name = "website")]
#[command(about = "DroneVista marketing site")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port for HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Static files directory
    #[arg(long, default_value = "./static")]
    static_dir: PathBuf,

    /// Development or production behavior; defaults to the build profile
    #[arg(long, value_enum)]
    mode: Option<BuildMode>,

    /// Simulated contact form send latency
    #[arg(long, default_value = "1000")]
    submit_latency_ms: u64,

    /// Entries kept by the site logger
    #[arg(long, default_value = "1000")]
    log_capacity: usize,
}

impl From<Args> for SiteConfig {
    fn from(args: Args) -> Self {
        SiteConfig {
            bind_address: SocketAddr::new(args.host, args.port),
            mode: args.mode.unwrap_or_else(BuildMode::from_build),
            log_level: args.log_level,
            static_dir: args.static_dir,
            submit_latency: Duration::from_millis(args.submit_latency_ms),
            log_capacity: args.log_capacity,
        }
    }
}

#[tokio::main]
async fn main() -> WebsiteResult<()> {
    let config = SiteConfig::from(Args::parse());
    config.validate()?;

    logging::init_tracing_with_level(Some(&config.log_level))?;

    let logger = SiteLogger::init_global(config.logger_config());
    site_info!(
        "website",
        "Site logger ready (capacity {}, dev mode {})",
        logger.capacity(),
        logger.is_development()
    );

    let site = WebSite::new(SiteState::new(config, logger.clone()));
    if let Err(e) = site.run().await {
        logging::log_error("website", "serving", &e);
        return Err(e);
    }

    Ok(())
}
