//! Resource router entry point.
//!
//! Loads configuration, discovers the controllers directory and either
//! prints the resulting route listing or serves it over HTTP with stub
//! endpoints, depending on `ROUTER_TRANSPORT`.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use resource_router::core::{Config, RouterServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level, config.logging.with_timestamps);

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = RouterServer::new(config);
    server.run().await?;

    info!("Router shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so the route listing on stdout stays clean.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
