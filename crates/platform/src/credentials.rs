//! The credential set a check logs in with

use common::Secret;

/// Script-app credentials plus the client descriptor.
///
/// Built once at startup and never mutated. `user_agent` is the descriptor
/// the platform requires on every request.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: Secret,
    pub username: String,
    pub password: Secret,
    pub user_agent: String,
}
