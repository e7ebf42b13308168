use common::EntityId;
use domain::{RepositoryError, ValidationError};
use thiserror::Error;

/// Errors that can occur when reading or writing the relational store.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// No row exists for the requested id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// A row with the same id already exists.
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: EntityId },

    /// A stored row failed entity validation.
    #[error("Invalid stored entity: {0}")]
    Corrupt(#[from] ValidationError),

    /// A stored column holds a value outside the domain range.
    #[error("Column {column} holds out-of-range value {value}")]
    InvalidColumn { column: &'static str, value: i64 },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl PersistenceError {
    /// Maps a failed INSERT, turning unique violations into `AlreadyExists`.
    pub(crate) fn on_insert(error: sqlx::Error, entity: &'static str, id: &EntityId) -> Self {
        if let sqlx::Error::Database(ref db_err) = error
            && db_err.is_unique_violation()
        {
            return PersistenceError::AlreadyExists {
                entity,
                id: id.clone(),
            };
        }
        PersistenceError::Database(error)
    }
}

impl From<PersistenceError> for RepositoryError {
    fn from(error: PersistenceError) -> Self {
        match error {
            PersistenceError::NotFound { entity, id } => RepositoryError::NotFound { entity, id },
            PersistenceError::AlreadyExists { entity, id } => {
                RepositoryError::AlreadyExists { entity, id }
            }
            PersistenceError::Corrupt(e) => RepositoryError::Corrupt(e),
            other => RepositoryError::Backend(Box::new(other)),
        }
    }
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Converts a stored BIGINT into a `u32` domain value.
pub(crate) fn to_u32(column: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| PersistenceError::InvalidColumn { column, value })
}
