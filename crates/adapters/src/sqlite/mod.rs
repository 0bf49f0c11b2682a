mod queries;

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use folio_application::{ApplicationError, PreferenceStore};
use rusqlite::Connection;
use tracing::debug;

use crate::migrations::MIGRATIONS;

#[derive(Debug, Clone)]
pub struct SqlitePreferenceStore {
    path: PathBuf,
}

impl SqlitePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl PreferenceStore for SqlitePreferenceStore {
    fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "preferences path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        for migration in MIGRATIONS {
            conn.execute_batch(migration)
                .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        }

        debug!(path = %self.path.display(), "preference store ready");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let conn = self.open_connection()?;
        queries::find_preference(&conn, key)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        let now = Utc::now().to_rfc3339();
        queries::upsert_preference(&conn, key, value, &now)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}
