/// Storage-layer errors for SQLite vector store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("persist directory unusable: {path}: {reason}")]
    PersistDirectory { path: String, reason: String },
}
