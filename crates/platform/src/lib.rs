//! Platform abstraction for the login check
//!
//! Defines the `Platform` and `Session` traits that decouple the diagnostic
//! runner from the HTTP client that talks to Reddit. The service implements
//! them on top of `reddit-auth`; tests implement them with in-memory fakes.
//!
//! A check makes at most three calls through this seam:
//! 1. `Platform::connect` builds an authenticated session
//! 2. `Session::identity` asks who the session is logged in as
//! 3. `Session::subreddit` fetches a resource handle (only after a successful identity)

pub mod credentials;

pub use credentials::Credentials;

use std::future::Future;
use std::pin::Pin;

/// Failure surfaced by the platform client.
///
/// `kind` is the category name of the underlying error and `message` its
/// description. Both are reported verbatim, never reclassified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PlatformError {
    pub kind: String,
    pub message: String,
}

impl PlatformError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Result alias for platform operations.
pub type Result<T> = std::result::Result<T, PlatformError>;

/// Lightweight reference to a subreddit returned by `Session::subreddit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubredditHandle {
    pub name: String,
    pub subscribers: Option<u64>,
}

/// Entry point to a platform: turns credentials into a session.
///
/// Uses `Pin<Box<dyn Future>>` return types for dyn-compatibility (`&dyn Platform`).
pub trait Platform: Send + Sync {
    /// Identifier for logging (e.g. "reddit")
    fn id(&self) -> &str;

    /// Construct an authenticated session from the credential set.
    fn connect<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> Pin<Box<dyn Future<Output = Result<Box<dyn Session>>> + Send + 'a>>;
}

/// An authenticated (or not) connection owned by a single check.
pub trait Session: Send + Sync {
    /// Name of the account this session is authenticated as, if any.
    fn identity(&self) -> Pin<Box<dyn Future<Output = Result<Option<String>>> + Send + '_>>;

    /// Fetch a handle for the named subreddit.
    fn subreddit<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<SubredditHandle>> + Send + 'a>>;
}
