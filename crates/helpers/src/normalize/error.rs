use thiserror::Error;

/// Input did not match the expected tagged-union shape
#[derive(Debug, Error)]
#[error("Failed to decode {target}: {source}")]
pub struct DecodeError {
    /// Name of the type that was being decoded
    pub target: &'static str,
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn new(target: &'static str, source: serde_json::Error) -> Self {
        Self { target, source }
    }
}
