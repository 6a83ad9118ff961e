//! SQLite storage for stores and items
//!
//! # Design Principles
//!
//! - One connection per unit of work, closed on every exit path
//! - Schema created idempotently at startup
//! - Parameterized SQL only
//! - Constraint failures classified, never string-matched by callers
//! - No process-wide mutable state; the database file is the only state

mod database;
mod errors;
pub mod items;
pub mod stores;

pub use database::{generate_id, Database};
pub use errors::{StorageError, StorageResult};
