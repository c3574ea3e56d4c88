//! Reddit OAuth constants
//!
//! Public endpoint locations for script apps. Client id, secret and account
//! credentials are supplied at runtime and never live here.

/// Token endpoint for the password grant (www host, not the oauth host)
pub const TOKEN_ENDPOINT: &str = "https://www.reddit.com/api/v1/access_token";

/// Base URL for bearer-authenticated API calls
pub const API_BASE: &str = "https://oauth.reddit.com";

/// Identity endpoint, relative to `API_BASE`
pub const IDENTITY_PATH: &str = "/api/v1/me";

/// Subreddit fetched to confirm read access beyond the identity endpoint
pub const PROBE_SUBREDDIT: &str = "test";
