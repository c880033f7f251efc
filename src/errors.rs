use thiserror::Error;

/// Domain error raised by a translator when a translation cannot be produced.
///
/// Every failure an adapter sees (unsupported language, backend outage,
/// malformed backend response) is folded into this one kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Translation via {provider} failed: {cause}")]
pub struct TranslationError {
    pub provider: String,
    pub cause: String,
}

impl TranslationError {
    pub fn new(provider: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            cause: cause.into(),
        }
    }

    pub fn unsupported_language(provider: impl Into<String>, code: &str) -> Self {
        Self::new(provider, format!("language {} is not supported", code))
    }
}

/// Result type for translator operations
pub type TranslationResult<T> = Result<T, TranslationError>;

/// Low-level failures reported by the mock backend APIs.
///
/// These never cross an adapter boundary.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Empty text")]
    EmptyText,

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Character quota exceeded: {used} of {limit} characters used")]
    QuotaExceeded { used: usize, limit: usize },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
