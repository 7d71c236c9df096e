use thiserror::Error;

/// Errors raised when constructing validated model values.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid map id: {0:?}")]
    InvalidMapId(String),
}

/// Errors raised when a map is finalized.
///
/// Both misconfiguration variants indicate caller-side misuse: every call
/// upstream of finalization degrades to a no-op instead of failing.
#[derive(Debug, Error)]
pub enum DnaError {
    #[error("misconfigured map model: DNA sequence is empty")]
    EmptyDna,
    #[error("misconfigured map model: DNA must begin with a `map` record, found `{found}`")]
    InvalidDnaHead { found: &'static str },
    #[error("failed to serialize DNA: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DnaError {
    /// True for the two misconfigured-model variants.
    pub fn is_misconfigured(&self) -> bool {
        matches!(self, Self::EmptyDna | Self::InvalidDnaHead { .. })
    }
}

pub type Result<T> = std::result::Result<T, DnaError>;
