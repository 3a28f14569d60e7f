use thiserror::Error;

/// Errors produced by summon record stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Refusing to file a record under the null id.
    #[error("cannot store a record under the null summon id")]
    NullSummonId,

    /// Serialization or deserialization of a record failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
