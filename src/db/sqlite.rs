//! SQLite connection handling.
//!
//! Opens one connection per request against the configured database file and
//! converts engine rows into [`Row`] values.

use crate::config::DatabaseConfig;
use crate::db::{Row, Value};
use crate::error::{IntelliSqlError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{Connection, Row as SqlxRow, TypeInfo, ValueRef};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// How long to wait on a lock held by another connection.
const BUSY_TIMEOUT_SECS: u64 = 5;

/// A local SQLite database file.
#[derive(Debug, Clone)]
pub struct SqliteDatabase {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl SqliteDatabase {
    /// Creates a handle for the configured file. Nothing is opened yet.
    pub fn new(config: &DatabaseConfig) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(BUSY_TIMEOUT_SECS));

        Self {
            path: config.path.clone(),
            options,
        }
    }

    /// Opens a fresh connection, creating the file if it does not exist.
    ///
    /// The caller owns the connection and must close it.
    pub async fn connect(&self) -> Result<SqliteConnection> {
        debug!("Opening connection to {}", self.path.display());
        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(IntelliSqlError::from)
    }
}

/// Converts a sqlx SqliteRow to our Row type.
pub fn convert_row(row: &SqliteRow) -> Row {
    (0..row.len()).map(|i| convert_value(row, i)).collect()
}

/// Decodes one cell according to its runtime storage class.
fn convert_value(row: &SqliteRow, index: usize) -> Value {
    let storage_class = match row.try_get_raw(index) {
        Ok(raw) if raw.is_null() => return Value::Null,
        Ok(raw) => raw.type_info().name().to_uppercase(),
        Err(_) => return Value::Null,
    };

    match storage_class.as_str() {
        "INTEGER" => row
            .try_get::<i64, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),

        "REAL" => row
            .try_get::<f64, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),

        "BLOB" => row
            .try_get::<Vec<u8>, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),

        // TEXT, and date/time affinities which SQLite stores as text
        _ => row
            .try_get::<String, _>(index)
            .map(Value::from)
            .unwrap_or(Value::Null),
    }
}
