use thiserror::Error;

/// Persistence failures only; field presence and typing are enforced by the
/// JSON extractor before any model call.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("database error: {0}")]
    Db(String),
}
