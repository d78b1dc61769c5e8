// src/server/mod.rs
//! Larder HTTP server
//!
//! This module provides an HTTP server that:
//! - Serves recipes as nested JSON (two flat queries joined in memory)
//! - Accepts multipart recipe submissions with an optional image
//! - Delegates bearer-token verification to an external verifier
//! - Serves uploaded images as static files under /images

mod auth;
mod config;
mod handlers;
mod routes;
mod upload;

pub use auth::{AuthError, HttpTokenVerifier, Identity, StaticTokenVerifier, TokenVerifier};
pub use config::LarderConfig;
pub use routes::create_router;
pub use upload::{generate_filename, store_image};

use crate::db;
use crate::error::Result;
use anyhow::Context;
use rusqlite::Connection;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Path to the SQLite database
    pub db_path: String,
    /// Directory holding uploaded images, served under /images
    pub image_dir: PathBuf,
    /// External token verification endpoint
    pub verifier_url: String,
    /// Fixed token accepted instead of calling the verifier (testing and
    /// single-user deployments)
    pub static_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".parse().unwrap(),
            db_path: "/var/lib/larder/larder.db".to_string(),
            image_dir: PathBuf::from("/var/lib/larder/images"),
            verifier_url: "http://127.0.0.1:4000/verify".to_string(),
            static_token: None,
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    pub verifier: Box<dyn TokenVerifier>,
}

impl ServerState {
    pub fn new(config: ServerConfig, verifier: Box<dyn TokenVerifier>) -> Self {
        Self { config, verifier }
    }

    /// Open a connection for the duration of one request
    pub fn connect(&self) -> Result<Connection> {
        db::open(&self.config.db_path)
    }
}

/// Start the larder server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting larder server on {}", config.bind_addr);
    tracing::info!("Database: {}", config.db_path);
    tracing::info!("Image directory: {:?}", config.image_dir);

    db::init(&config.db_path).context("failed to initialize database")?;
    std::fs::create_dir_all(&config.image_dir).context("failed to create image directory")?;

    let verifier: Box<dyn TokenVerifier> = match &config.static_token {
        Some(token) => {
            tracing::info!("Token verification: static token");
            Box::new(StaticTokenVerifier::new(token.clone()))
        }
        None => {
            tracing::info!("Token verification: {}", config.verifier_url);
            Box::new(HttpTokenVerifier::new(config.verifier_url.clone()))
        }
    };

    let state = Arc::new(ServerState::new(config.clone(), verifier));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Larder is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
