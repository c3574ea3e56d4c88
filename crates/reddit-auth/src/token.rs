//! OAuth password grant
//!
//! Script apps log in by POSTing the account username and password to
//! `TOKEN_ENDPOINT`, authenticating the app itself with HTTP Basic auth
//! (client id / client secret). The endpoint lives on `www.reddit.com`, while
//! the resulting bearer token is used against `oauth.reddit.com`.
//!
//! Reddit reports a wrong username or password as a 200 response carrying an
//! `error` field, and a wrong client id or secret as a 401.

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Inputs to the password grant.
#[derive(Clone, Copy)]
pub struct PasswordGrant<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful response from the token endpoint.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    /// Seconds until the access token expires
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub scope: String,
}

/// Body shapes the token endpoint answers 2xx with.
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenReply {
    Granted(TokenResponse),
    Rejected { error: String },
}

/// Exchange script-app credentials for a bearer token.
///
/// `client` must already carry the client descriptor as its User-Agent.
pub async fn password_grant(
    client: &reqwest::Client,
    token_url: &str,
    grant: &PasswordGrant<'_>,
) -> Result<TokenResponse> {
    debug!(token_url, client_id = grant.client_id, username = grant.username, "requesting token");

    let response = client
        .post(token_url)
        .basic_auth(grant.client_id, Some(grant.client_secret))
        .form(&[
            ("grant_type", "password"),
            ("username", grant.username),
            ("password", grant.password),
        ])
        .send()
        .await
        .map_err(|e| Error::Http(format!("token request failed: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Http(format!("reading token response failed: {e}")))?;

    if !status.is_success() {
        // 401/403 means the app's client id or secret was refused
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(Error::InvalidCredentials(format!(
                "token endpoint rejected client credentials ({status})"
            )));
        }
        return Err(Error::Response {
            status: status.as_u16(),
            body,
        });
    }

    match serde_json::from_str::<TokenReply>(&body) {
        Ok(TokenReply::Granted(token)) => {
            debug!(scope = %token.scope, expires_in = token.expires_in, "token granted");
            Ok(token)
        }
        Ok(TokenReply::Rejected { error }) => Err(Error::OAuth(error)),
        Err(e) => Err(Error::Decode(format!("invalid token response: {e}"))),
    }
}
