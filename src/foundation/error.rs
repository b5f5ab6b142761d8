/// Convenience result type used across Batchblast.
pub type BlastResult<T> = Result<T, BlastError>;

/// Top-level error taxonomy used by the batch APIs.
#[derive(thiserror::Error, Debug)]
pub enum BlastError {
    /// Invalid job configuration, detected before any host mutation.
    #[error("config error: {0}")]
    Config(String),

    /// A host state, query or capture call failed.
    #[error("host error: {0}")]
    Host(String),

    /// Discovering or ordering a captured image sequence failed.
    #[error("sequence error: {0}")]
    Sequence(String),

    /// Opening, feeding or finalizing a video stream failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing persisted documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlastError {
    /// Build a [`BlastError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BlastError::Host`] value.
    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host(msg.into())
    }

    /// Build a [`BlastError::Sequence`] value.
    pub fn sequence(msg: impl Into<String>) -> Self {
        Self::Sequence(msg.into())
    }

    /// Build a [`BlastError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BlastError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
