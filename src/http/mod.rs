//! HTTP server module.
//!
//! Binds a plain HTTP listener on the loopback interface and serves the router
//! until a shutdown signal arrives. The server includes:
//! - Fatal bind errors (no retry when the port is taken)
//! - Graceful shutdown on SIGTERM/SIGINT with a bounded drain period

mod server;
mod shutdown;

pub use server::{bind, serve, start_server, ServerError};
pub use shutdown::shutdown_signal;
