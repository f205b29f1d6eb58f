//! Integration tests for IntelliSQL.
//!
//! Everything runs against temporary SQLite files and the mock model client,
//! so no network access or API key is needed.

pub mod assistant_test;
pub mod executor_test;
pub mod translator_test;
