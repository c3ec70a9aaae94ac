//! Personal Aid API: loopback health-check sidecar.
//!
//! Serves `GET /api/health` on `127.0.0.1` so the desktop shell can tell the
//! sidecar is alive.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
