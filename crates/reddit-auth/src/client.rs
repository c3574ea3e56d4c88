//! Authenticated Reddit API client
//!
//! Holds the bearer token obtained from the password grant and performs the
//! read-only calls used by the check. Redirects are never followed: Reddit
//! answers an unknown subreddit with a redirect to its search page, which is
//! reported as `NotFound` instead.

use std::time::Duration;

use common::Secret;
use serde::Deserialize;
use tracing::debug;

use crate::constants::{API_BASE, IDENTITY_PATH, TOKEN_ENDPOINT};
use crate::error::{Error, Result};
use crate::token::{PasswordGrant, password_grant};

/// Where the token endpoint and the OAuth API live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub api_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: TOKEN_ENDPOINT.to_string(),
            api_base: API_BASE.to_string(),
        }
    }
}

/// Build the HTTP client shared by the token and API calls.
///
/// Every request carries `user_agent`; Reddit throttles clients that don't
/// send a descriptive one.
pub fn build_http_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| Error::Http(format!("building HTTP client: {e}")))
}

/// Subreddit metadata from `/r/<name>/about`.
#[derive(Debug, Clone, Deserialize)]
pub struct Subreddit {
    pub display_name: String,
    #[serde(default)]
    pub subscribers: Option<u64>,
}

/// Reddit wraps objects as `{"kind": "...", "data": {...}}`.
#[derive(Deserialize)]
struct Thing<T> {
    data: T,
}

#[derive(Deserialize)]
struct Identity {
    #[serde(default)]
    name: Option<String>,
}

/// A logged-in session against the OAuth API.
pub struct RedditClient {
    http: reqwest::Client,
    api_base: String,
    access_token: Secret,
}

impl RedditClient {
    /// Run the password grant and keep the resulting bearer token.
    pub async fn login(
        http: reqwest::Client,
        endpoints: &Endpoints,
        grant: &PasswordGrant<'_>,
    ) -> Result<Self> {
        let token = password_grant(&http, &endpoints.token_url, grant).await?;
        Ok(Self {
            http,
            api_base: endpoints.api_base.trim_end_matches('/').to_string(),
            access_token: Secret::new(token.access_token),
        })
    }

    /// Name of the authenticated account, or `None` when the API returns none.
    pub async fn me(&self) -> Result<Option<String>> {
        let identity: Identity = self.get_json(IDENTITY_PATH).await?;
        Ok(identity.name.filter(|name| !name.is_empty()))
    }

    /// Fetch `/r/<name>/about`.
    pub async fn subreddit(&self, name: &str) -> Result<Subreddit> {
        let thing: Thing<Subreddit> = self.get_json(&format!("/r/{name}/about")).await?;
        Ok(thing.data)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.api_base);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.access_token.expose())
            .send()
            .await
            .map_err(|e| Error::Http(format!("GET {path} failed: {e}")))?;

        let status = response.status();
        if status.is_redirection() || status.as_u16() == 404 {
            return Err(Error::NotFound(path.to_string()));
        }
        if status.as_u16() == 401 {
            return Err(Error::InvalidCredentials(format!(
                "bearer token rejected on {path}"
            )));
        }
        if status.as_u16() == 403 {
            return Err(Error::Forbidden(path.to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("reading {path} response failed: {e}")))?;

        if !status.is_success() {
            return Err(Error::Response {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Decode(format!("{path}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::{self, CLIENT_ID, CLIENT_SECRET, PASSWORD, USER_AGENT, USERNAME};

    const GRANT: PasswordGrant<'static> = PasswordGrant {
        client_id: CLIENT_ID,
        client_secret: CLIENT_SECRET,
        username: USERNAME,
        password: PASSWORD,
    };

    fn endpoints(base: &str) -> Endpoints {
        Endpoints {
            token_url: format!("{base}/api/v1/access_token"),
            api_base: format!("{base}/"),
        }
    }

    async fn logged_in(base: &str) -> RedditClient {
        let http = build_http_client(USER_AGENT, Duration::from_secs(5)).unwrap();
        RedditClient::login(http, &endpoints(base), &GRANT)
            .await
            .unwrap()
    }

    #[test]
    fn default_endpoints_point_at_reddit() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.token_url, "https://www.reddit.com/api/v1/access_token");
        assert_eq!(endpoints.api_base, "https://oauth.reddit.com");
    }

    #[test]
    fn subreddit_about_deserializes() {
        let json = r#"{"kind":"t5","data":{"display_name":"test","subscribers":42,"over18":false}}"#;
        let thing: Thing<Subreddit> = serde_json::from_str(json).unwrap();
        assert_eq!(thing.data.display_name, "test");
        assert_eq!(thing.data.subscribers, Some(42));
    }

    #[tokio::test]
    async fn me_returns_account_name() {
        let (base, _server) = mock_server::start().await;
        let client = logged_in(&base).await;
        assert_eq!(client.me().await.unwrap().as_deref(), Some(USERNAME));
    }

    #[tokio::test]
    async fn subreddit_returns_metadata() {
        let (base, _server) = mock_server::start().await;
        let client = logged_in(&base).await;

        let subreddit = client.subreddit("test").await.unwrap();
        assert_eq!(subreddit.display_name, "test");
        assert_eq!(subreddit.subscribers, Some(12345));
    }

    #[tokio::test]
    async fn private_subreddit_is_forbidden() {
        let (base, _server) = mock_server::start().await;
        let client = logged_in(&base).await;

        let err = client.subreddit("private").await.unwrap_err();
        assert!(matches!(err, Error::Forbidden(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn redirect_to_search_is_not_found() {
        let (base, _server) = mock_server::start().await;
        let client = logged_in(&base).await;

        let err = client.subreddit("missing").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(ref p) if p == "/r/missing/about"), "got: {err:?}");
    }

    #[tokio::test]
    async fn non_json_body_is_decode_error() {
        let (base, _server) = mock_server::start().await;
        let client = logged_in(&base).await;

        let err = client.subreddit("broken").await.unwrap_err();
        assert_eq!(err.kind(), "Decode", "got: {err:?}");
    }

    #[tokio::test]
    async fn stale_token_is_invalid_credentials() {
        let (base, _server) = mock_server::start().await;
        let client = RedditClient {
            http: build_http_client(USER_AGENT, Duration::from_secs(5)).unwrap(),
            api_base: base,
            access_token: Secret::new("at_revoked"),
        };

        let err = client.me().await.unwrap_err();
        assert!(matches!(err, Error::InvalidCredentials(_)), "got: {err:?}");
    }

    #[tokio::test]
    async fn login_surfaces_grant_errors() {
        let (base, _server) = mock_server::start().await;
        let http = build_http_client(USER_AGENT, Duration::from_secs(5)).unwrap();
        let grant = PasswordGrant {
            password: "wrong",
            ..GRANT
        };

        let result = RedditClient::login(http, &endpoints(&base), &grant).await;
        let err = result.err().expect("wrong password must fail");
        assert_eq!(err.kind(), "OAuth");
    }
}
