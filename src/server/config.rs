// src/server/config.rs
//! Configuration file parsing for the larder server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address
//! - [storage] - Database path, image directory
//! - [auth] - Verifier endpoint or static token

use crate::server::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct LarderConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub auth: AuthSection,
}

#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Bind address, e.g. "0.0.0.0:3000"
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_db_path")]
    pub db_path: String,

    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            image_dir: default_image_dir(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthSection {
    /// External token verification endpoint
    pub verifier_url: Option<String>,

    /// Fixed token accepted instead of calling the verifier
    pub static_token: Option<String>,
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_db_path() -> String {
    "/var/lib/larder/larder.db".to_string()
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("/var/lib/larder/images")
}

impl LarderConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {:?}", path))?;
        let config: LarderConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {:?}", path))?;
        Ok(config)
    }

    /// Convert to the runtime server configuration
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let defaults = ServerConfig::default();

        let bind_addr = self
            .server
            .bind
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.server.bind))?;

        Ok(ServerConfig {
            bind_addr,
            db_path: self.storage.db_path.clone(),
            image_dir: self.storage.image_dir.clone(),
            verifier_url: self
                .auth
                .verifier_url
                .clone()
                .unwrap_or(defaults.verifier_url),
            static_token: self.auth.static_token.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: LarderConfig = toml::from_str("").unwrap();
        let server = config.to_server_config().unwrap();

        assert_eq!(server.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(server.db_path, "/var/lib/larder/larder.db");
        assert!(server.static_token.is_none());
    }

    #[test]
    fn test_full_config() {
        let config: LarderConfig = toml::from_str(
            r#"
            [server]
            bind = "127.0.0.1:8080"

            [storage]
            db_path = "/tmp/test.db"
            image_dir = "/tmp/images"

            [auth]
            verifier_url = "https://auth.example.com/verify"
            "#,
        )
        .unwrap();

        let server = config.to_server_config().unwrap();
        assert_eq!(server.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(server.db_path, "/tmp/test.db");
        assert_eq!(server.verifier_url, "https://auth.example.com/verify");
    }

    #[test]
    fn test_invalid_bind_address_is_rejected() {
        let config: LarderConfig = toml::from_str(
            r#"
            [server]
            bind = "not-an-address"
            "#,
        )
        .unwrap();

        assert!(config.to_server_config().is_err());
    }
}
