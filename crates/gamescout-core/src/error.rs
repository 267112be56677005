use std::fmt;

use thiserror::Error;

/// Which of the two search indexes a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Lexical,
    Vector,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::Lexical => write!(f, "lexical"),
            IndexKind::Vector => write!(f, "vector"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Caller error: rejected before any external call is made.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("translation provider unavailable: {0}")]
    TranslationUnavailable(String),

    #[error("embedding provider unavailable: {0}")]
    EmbeddingUnavailable(String),

    #[error("{index} index unavailable: {reason}")]
    IndexUnavailable { index: IndexKind, reason: String },

    #[error("recommendation generator unavailable: {0}")]
    GenerationUnavailable(String),

    /// Both search branches failed; the request cannot produce any result.
    #[error("retrieval unavailable: {0}")]
    RetrievalUnavailable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn lexical_index(reason: impl fmt::Display) -> Self {
        Error::IndexUnavailable { index: IndexKind::Lexical, reason: reason.to_string() }
    }

    pub fn vector_index(reason: impl fmt::Display) -> Self {
        Error::IndexUnavailable { index: IndexKind::Vector, reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
