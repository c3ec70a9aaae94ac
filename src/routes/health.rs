//! Health check endpoint polled by the desktop shell.
//!
//! Returns a fixed JSON payload whenever the process can answer HTTP. This is a
//! liveness probe only; nothing else is inspected.

use axum::Json;
use serde::Serialize;

use crate::config::{HEALTH_STATUS_OK, SERVICE_NAME};

/// Payload of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: HEALTH_STATUS_OK,
            service: SERVICE_NAME,
        }
    }
}

/// Health check handler.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_returns_ok_payload() {
        let Json(payload) = health().await;
        assert_eq!(payload.status, "ok");
        assert_eq!(payload.service, "personal-aid");
    }

    #[test]
    fn test_payload_serializes_in_field_order() {
        let json = serde_json::to_string(&HealthStatus::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok","service":"personal-aid"}"#);
    }
}
