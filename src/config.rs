//! Configuration constants and the resolved server configuration.
//!
//! The sidecar has no config file: the listen port is the only input, taken
//! from the command line. Everything else is fixed here. `ServerConfig` is the
//! resolved configuration handed to the HTTP server.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::cli::Args;

// =============================================================================
// Listener
// =============================================================================

/// Port used when none is given on the command line
pub const DEFAULT_PORT: u16 = 18008;

/// Loopback only; the sidecar must not be reachable from other hosts
pub const BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Seconds to wait for in-flight requests after a shutdown signal
pub const GRACEFUL_SHUTDOWN_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Health Endpoint
// =============================================================================

/// Route of the health check
pub const HEALTH_PATH: &str = "/api/health";

/// Value of the `status` field in the health payload
pub const HEALTH_STATUS_OK: &str = "ok";

/// Value of the `service` field in the health payload
pub const SERVICE_NAME: &str = "personal-aid";

/// Liveness answers must never be served from a cache
pub const CACHE_CONTROL_HEALTH: &str = "no-store";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "personal_aid_api=info";

/// Resolved HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build the configuration from parsed command-line arguments.
    ///
    /// The host is always loopback; only the port is configurable.
    pub fn from_args(args: &Args) -> Self {
        Self {
            host: BIND_HOST,
            port: args.port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
