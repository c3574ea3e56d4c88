//! Error types for Reddit authentication and API calls

/// Errors from the token endpoint and the OAuth API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("received {status} HTTP response: {body}")]
    Response { status: u16, body: String },

    /// The token endpoint answered 2xx with an `error` field (bad username/password)
    #[error("{0} error processing request")]
    OAuth(String),

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl Error {
    /// Category name reported alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Http(_) => "Request",
            Error::Response { .. } => "Response",
            Error::OAuth(_) => "OAuth",
            Error::InvalidCredentials(_) => "InvalidCredentials",
            Error::Forbidden(_) => "Forbidden",
            Error::NotFound(_) => "NotFound",
            Error::Decode(_) => "Decode",
        }
    }
}

/// Result alias for Reddit operations.
pub type Result<T> = std::result::Result<T, Error>;
