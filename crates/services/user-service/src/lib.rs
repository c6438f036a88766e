//! User Service Library
//!
//! In-memory user management exposed over a JSON HTTP API. The store is
//! created once per process and handed to every consumer explicitly.

pub mod api;
pub mod config;
pub mod repository;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use domain::{demo_user_email, demo_user_name, DomainResult};

use crate::api::{create_router, AppState};
use crate::config::UserServiceConfig;
use crate::repository::UserStore;

/// Build the process-wide store, seeding demo users if configured.
pub fn build_store(config: &UserServiceConfig) -> DomainResult<UserStore> {
    let store = UserStore::with_users(
        (1..=config.seed_users).map(|n| (demo_user_name(n), demo_user_email(n))),
    )?;
    if config.seed_users > 0 {
        info!("Seeded {} demo users", config.seed_users);
    }
    Ok(store)
}

/// Run the HTTP server with the given configuration until Ctrl-C.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    // One store per process
    let store = Arc::new(build_store(&config)?);
    let state = AppState::from_store(store);

    let app = create_router(state);

    let addr: SocketAddr = config.service.bind_address().parse()?;
    info!("{} listening on {}", config.service.service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
