//! SQLite database module for wastegraph

mod graphs;
mod schema;

use crate::error::{Result, WasteGraphError};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub use graphs::{GraphSummary, StoredGraph};
pub use schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};

/// SQLite database holding saved graphs
#[derive(Debug)]
pub struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Open or create the database at `path`, installing the schema if needed
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path).map_err(|e| {
            WasteGraphError::Other(format!(
                "failed to open database at {}: {}",
                path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| crate::map_db_err!("enable foreign keys", e))?;

        let created = create_schema(&conn)
            .map_err(|e| crate::map_db_err!("create database schema", e))?;
        if created == SchemaCreateResult::Created {
            tracing::info!(path = %path.display(), "initialized database");
        }

        Ok(Database {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// Open a database that must already exist
    pub fn open_existing(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WasteGraphError::DatabaseNotFound {
                path: path.to_path_buf(),
            });
        }
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn schema_version(&self) -> Result<i32> {
        schema::read_schema_version(&self.conn)
            .ok_or_else(|| WasteGraphError::Other("schema version missing".to_string()))
    }

    /// Drop and recreate every table
    pub fn reset(&self) -> Result<()> {
        schema::recreate_schema(&self.conn).map_err(|e| crate::map_db_err!("reset database", e))?;
        tracing::info!(path = %self.path.display(), "database reset");
        Ok(())
    }
}
