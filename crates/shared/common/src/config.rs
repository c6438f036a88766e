//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from `<PREFIX>_HOST`, `<PREFIX>_PORT` and
    /// `<PREFIX>_LOG_LEVEL` (falling back to `LOG_LEVEL`).
    pub fn from_env(service_name: &str, prefix: &str, default_port: u16) -> Self {
        Self {
            service_name: service_name.to_string(),
            host: env::var(format!("{}_HOST", prefix))
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var(format!("{}_PORT", prefix))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port),
            log_level: env::var(format!("{}_LOG_LEVEL", prefix))
                .or_else(|_| env::var("LOG_LEVEL"))
                .unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Socket address string (`host:port`)
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}
