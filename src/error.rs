// src/error.rs
//! Error types for the larder backend

use thiserror::Error;

/// Errors that can occur while serving or persisting recipes
#[derive(Error, Debug)]
pub enum Error {
    /// Requested recipe identifier has no matching row
    #[error("Recipe not found")]
    NotFound,

    /// Write request carried no bearer token
    #[error("Missing authentication token")]
    Unauthorized,

    /// Bearer token was present but failed verification
    #[error("Invalid authentication token")]
    Forbidden,

    /// Storage error during a create, including a failed rollback
    #[error("Failed to create recipe")]
    WriteFailed,

    /// Storage error during retrieval
    #[error("Failed to fetch recipes")]
    ReadFailed,

    /// Request body did not match the expected payload schema
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
