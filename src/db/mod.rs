// src/db/mod.rs

//! SQLite access for the larder backend
//!
//! Each request opens its own connection for the duration of the request;
//! connections and any open transaction are dropped on every exit path.

pub mod models;
pub mod schema;

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

/// Open an existing database with foreign keys enforced
pub fn open(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    Ok(conn)
}

/// Initialize the database, creating parent directories and applying
/// any pending schema migrations
pub fn init(db_path: &str) -> Result<Connection> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = open(db_path)?;
    schema::migrate(&conn)?;
    Ok(conn)
}
