use thiserror::Error;

/// Errors surfaced by a cached read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The underlying request failed (network error, server error, ...).
    #[error("request to `{path}` failed: {message}")]
    Transport { path: String, message: String },

    /// The response arrived but did not match the expected shape.
    #[error("response from `{path}` did not decode: {message}")]
    Decode { path: String, message: String },

    /// No fetcher knows how to serve this path.
    #[error("no resource registered for `{0}`")]
    UnknownResource(String),
}

impl FetchError {
    pub fn transport(path: &str, message: impl Into<String>) -> Self {
        Self::Transport {
            path: path.to_string(),
            message: message.into(),
        }
    }

    pub fn decode(path: &str, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.to_string(),
            message: message.into(),
        }
    }
}
