// src/server/mod.rs

//! Gusteau cookbook server
//!
//! HTTP front end over the in-memory cookbook:
//! - `POST /parse` normalizes handwritten recipe names
//! - `POST /entry` adds an ingredient or recipe (write-once per name)
//! - `GET /summary` resolves a recipe into cook time and base ingredients
//!
//! State discipline: the cookbook lives behind a single `RwLock`. Inserts
//! take the write lock, so writers are serialized and an entry becomes
//! visible to readers atomically; summary and parse requests share the
//! read lock and proceed in parallel.

mod config;
mod handlers;
mod routes;

pub use config::{GusteauConfig, load_config};
pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::cookbook::Cookbook;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    pub cookbook: Cookbook,
}

impl ServerState {
    /// Create server state with an empty cookbook
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            cookbook: Cookbook::new(),
        }
    }
}

/// Start the Gusteau server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting Gusteau cookbook server on {}", config.bind_addr);

    let bind_addr = config.bind_addr;
    let state = Arc::new(RwLock::new(ServerState::new(config)));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Gusteau is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
