//! Statement execution with read/write classification.
//!
//! Every call opens its own connection, runs the statement verbatim, and
//! closes the connection again before returning, whatever the outcome. Errors
//! never escape: they come back as [`ExecutionResult::Failure`].

use sqlx::sqlite::SqliteConnection;
use sqlx::{Column, Connection, Executor as _, Statement};
use tracing::{debug, warn};

use crate::config::DatabaseConfig;
use crate::db::{convert_row, Row, SqliteDatabase};
use crate::error::{IntelliSqlError, Result};
use crate::query::statement::statement_count;

/// Status message for a successful non-SELECT statement.
pub const SUCCESS_MESSAGE: &str = "Executed successfully!";

/// Outcome of executing one statement. Exactly one shape per call.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    /// A SELECT ran; rows may be empty while columns are not.
    Rows {
        /// Result rows in engine order.
        data: Vec<Row>,
        /// Column names in select-list order.
        columns: Vec<String>,
    },
    /// A non-SELECT statement ran and was committed.
    Status {
        /// Always [`SUCCESS_MESSAGE`].
        message: String,
    },
    /// The engine rejected the statement or the connection failed.
    Failure {
        /// `"Error: "` followed by the engine's message.
        message: String,
    },
}

impl ExecutionResult {
    fn status() -> Self {
        Self::Status {
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    fn failure(error: &IntelliSqlError) -> Self {
        Self::Failure {
            message: format!("Error: {}", error.message()),
        }
    }

    /// Returns true for the `Failure` variant.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Returns true if the statement is treated as a read.
///
/// A case-insensitive `SELECT` prefix after leading whitespace; nothing else
/// (not `WITH`, not `PRAGMA`) counts.
pub fn is_read_query(statement: &str) -> bool {
    statement
        .trim_start()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("select"))
}

/// Runs SQL statements against the configured database file.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    database: SqliteDatabase,
}

impl QueryExecutor {
    /// Creates an executor for the configured database file.
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            database: SqliteDatabase::new(config),
        }
    }

    /// Executes one statement and reports rows, status, or failure.
    pub async fn execute(&self, statement: &str) -> ExecutionResult {
        let mut conn = match self.database.connect().await {
            Ok(conn) => conn,
            Err(e) => return ExecutionResult::failure(&e),
        };

        let outcome = run_statement(&mut conn, statement).await;

        if let Err(e) = conn.close().await {
            warn!("Failed to close database connection: {}", e);
        }

        match outcome {
            Ok(result) => result,
            Err(e) => {
                debug!("Statement failed: {}", e);
                ExecutionResult::failure(&e)
            }
        }
    }
}

/// Runs the statement on an open connection.
///
/// Exactly one statement is accepted. The connection is in autocommit mode,
/// so that statement is committed when it completes and leaves nothing
/// behind when it fails.
async fn run_statement(conn: &mut SqliteConnection, statement: &str) -> Result<ExecutionResult> {
    match statement_count(statement) {
        0 => {
            return Err(IntelliSqlError::execution(
                "cannot execute an empty statement",
            ))
        }
        1 => {}
        _ => {
            return Err(IntelliSqlError::execution(
                "You can only execute one statement at a time.",
            ))
        }
    }

    if is_read_query(statement) {
        // Columns come from the prepared statement so an empty result still
        // reports them.
        let prepared = (&mut *conn).prepare(statement).await?;
        let columns = prepared
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let rows = (&mut *conn).fetch_all(statement).await?;
        let data = rows.iter().map(convert_row).collect();

        return Ok(ExecutionResult::Rows { data, columns });
    }

    let done = (&mut *conn).execute(statement).await?;
    debug!("Statement affected {} rows", done.rows_affected());

    Ok(ExecutionResult::status())
}
