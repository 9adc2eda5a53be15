//! # haikus-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `HaikuRepository` port defined in `haikus-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Apply the `haikus` schema (sqlx embedded migrations)
//! - Map between domain types and database rows, dates as `YYYY-MM-DD` text
//!
//! ## Dependency rule
//! Depends on `haikus-app` (for the port trait) and `haikus-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod haiku_repo;
pub mod pool;

pub use error::StorageError;
pub use haiku_repo::SqliteHaikuRepository;
pub use pool::{Config, Database};
