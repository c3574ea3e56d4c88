//! Reddit script-app authentication library
//!
//! Logs in with the OAuth2 password grant and performs the read-only calls
//! the auth check needs. This crate has no dependency on the check binary and
//! can be tested on its own against a local mock server.
//!
//! Login flow:
//! 1. `client::build_http_client()` sets the client descriptor as User-Agent
//! 2. `token::password_grant()` trades script credentials for a bearer token
//! 3. `RedditClient::me()` reads the authenticated account name
//! 4. `RedditClient::subreddit()` reads `/r/<name>/about`

pub mod client;
pub mod constants;
pub mod error;
pub mod token;

#[cfg(test)]
mod mock_server;

pub use client::{Endpoints, RedditClient, Subreddit, build_http_client};
pub use constants::*;
pub use error::{Error, Result};
pub use token::{PasswordGrant, TokenResponse, password_grant};
