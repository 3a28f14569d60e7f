use thiserror::Error;

/// Errors surfaced by the SDK.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The identifier string is not a well-formed summon id.
    #[error("invalid identifier: {0}")]
    Identifier(#[from] necro_types::TypeError),

    /// Grid validation or pixel sampling failed.
    #[error("glyph error: {0}")]
    Glyph(#[from] necro_glyph::GlyphError),

    /// The injected store failed.
    #[error("store error: {0}")]
    Store(#[from] necro_store::StoreError),

    /// A decoded or supplied id has no stored record.
    #[error("no summon record found for {0}")]
    SummonNotFound(String),
}

/// Convenience alias for SDK results.
pub type SdkResult<T> = Result<T, SdkError>;
