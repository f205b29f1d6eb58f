//! Database access for IntelliSQL.
//!
//! A single local SQLite file is the only target. Connections are opened per
//! request; there is no pool.

mod sqlite;
mod types;

pub use sqlite::{convert_row, SqliteDatabase};
pub use types::{Row, Value};
