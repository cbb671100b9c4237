//! Shared application state for the HTTP transport.
//!
//! Holds only the database location. Every request opens its own
//! connection, so handlers never contend on an in-process lock; SQLite
//! arbitrates concurrent writes.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::db;

pub struct CoreState {
    db_path: PathBuf,
}

impl CoreState {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Create the data directory and bring the schema up to date.
    /// Called once at startup so the first request does not pay for it.
    pub fn initialize(&self) -> Result<(), CoreError> {
        if let Some(parent) = self.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| CoreError::DataDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        self.open_db()?;
        tracing::info!(path = %self.db_path.display(), "Database ready");
        Ok(())
    }

    /// Open a database connection. Most common operation in handlers.
    pub fn open_db(&self) -> Result<Connection, CoreError> {
        db::open_database(&self.db_path).map_err(CoreError::Database)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Database error: {0}")]
    Database(#[from] db::DatabaseError),
    #[error("Cannot create data directory {}: {source}", .path.display())]
    DataDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
