//! IntelliSQL - natural language to SQL for local SQLite databases.
//!
//! This library exposes the core modules for use by the binary and in
//! integration tests.

pub mod assistant;
pub mod config;
pub mod db;
pub mod error;
pub mod llm;
pub mod logging;
pub mod query;
