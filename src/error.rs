pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl Error {
    /// Message suitable for showing to the user in place of the view.
    pub fn display_message(&self) -> String {
        match self {
            Error::Network(msg) => format!("Error loading candidates: {}", msg),
            Error::Validation(errors) => crate::utils::validation::first_message(errors)
                .unwrap_or_else(|| "Invalid input".to_string()),
            other => other.to_string(),
        }
    }
}

/// Failure reported by the remote candidate collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("Bad request ({status}): {message}")]
    BadRequest { status: u16, message: String },

    #[error("Unexpected status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl SourceError {
    /// Classifies a non-success HTTP status. Client errors become `BadRequest`
    /// except 408 and 429, which are transient.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            408 | 429 => SourceError::Status { status, message },
            400..=499 => SourceError::BadRequest { status, message },
            _ => SourceError::Status { status, message },
        }
    }

    /// Malformed requests fail the same way every time, so they are not retried.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, SourceError::BadRequest { .. })
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return SourceError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => SourceError::from_status(status.as_u16(), err.to_string()),
            None => SourceError::Transport(err.to_string()),
        }
    }
}

/// Errors surfaced by the query cache to its callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CacheError {
    #[error("Request failed after {attempts} attempt(s): {source}")]
    Exhausted { attempts: u32, source: SourceError },

    #[error("Request was abandoned before it completed")]
    Abandoned,
}

impl From<CacheError> for Error {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::Exhausted { source, .. } => Error::Network(source.to_string()),
            CacheError::Abandoned => Error::Network(err.to_string()),
        }
    }
}
