//! Storage-specific error type wrapping sqlx errors.

use haikus_domain::error::HaikuError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed. Displays the database's own message
    /// when the engine produced one.
    #[error("{}", driver_message(.0))]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

fn driver_message(err: &sqlx::Error) -> String {
    match err.as_database_error() {
        Some(db) => db.message().to_string(),
        None => err.to_string(),
    }
}

impl From<StorageError> for HaikuError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
