//! Query execution and classification for IntelliSQL.

pub mod executor;
pub mod statement;

pub use executor::{is_read_query, ExecutionResult, QueryExecutor, SUCCESS_MESSAGE};
pub use statement::statement_count;
