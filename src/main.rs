//! Personal Aid API sidecar entry point.
//!
//! Parses the optional port argument, initializes tracing, builds the Axum
//! router and serves it on the loopback interface until shutdown.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use personal_aid_api::cli::Args;
use personal_aid_api::config::{ServerConfig, DEFAULT_LOG_FILTER};
use personal_aid_api::http::start_server;
use personal_aid_api::routes::create_router;

#[tokio::main]
async fn main() -> ExitCode {
    // Invalid port arguments exit here, before anything is bound
    let args = Args::parse();

    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_args(&args);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        "Loaded configuration"
    );

    match start_server(create_router(), &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}
