use thiserror::Error;

/// Engine-level error type.
///
/// Only the ingestion boundary produces these: scoring, progress, and
/// scheduling operations are total and resolve malformed input to a value
/// (clamp, ignore, or default) instead of failing.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to decode upstream payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("upstream payload is missing required field '{0}'")]
    MissingField(&'static str),
}
