//! User service configuration.

use std::env;

use common::ServiceConfig;

/// Default HTTP port for the user service
pub const DEFAULT_PORT: u16 = 8080;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Host, port and log level
    pub service: ServiceConfig,
    /// Number of demo users to seed at startup
    pub seed_users: usize,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig::from_env("user-service", "USER_SERVICE", DEFAULT_PORT),
            seed_users: env::var("USER_SERVICE_SEED_USERS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "user-service".to_string(),
                port: DEFAULT_PORT,
                ..ServiceConfig::default()
            },
            seed_users: 0,
        }
    }
}
