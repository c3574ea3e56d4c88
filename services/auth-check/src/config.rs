//! Configuration types and loading
//!
//! Precedence: env vars > config file > defaults. The client secret and the
//! account password are never read from the TOML directly: they come from
//! REDDIT_CLIENT_SECRET / REDDIT_PASSWORD or from the `*_file` paths.

use std::path::{Path, PathBuf};
use std::time::Duration;

use common::Secret;
use platform::Credentials;
use reddit_auth::Endpoints;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "reddit-auth-check.toml";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
    pub timeout: Duration,
}

/// On-disk TOML layout
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    reddit: RedditSection,
    #[serde(default)]
    http: HttpSection,
}

#[derive(Debug, Default, Deserialize)]
struct RedditSection {
    client_id: Option<String>,
    username: Option<String>,
    user_agent: Option<String>,
    /// Path to a file holding the client secret (alternative to REDDIT_CLIENT_SECRET)
    client_secret_file: Option<PathBuf>,
    /// Path to a file holding the account password (alternative to REDDIT_PASSWORD)
    password_file: Option<PathBuf>,
    token_url: Option<String>,
    api_base: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HttpSection {
    #[serde(default = "default_timeout")]
    timeout_secs: u64,
}

impl Default for HttpSection {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Load from an optional TOML file, then overlay the process environment.
    pub fn load(path: Option<&Path>) -> common::Result<Self> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    fn load_with_env(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> common::Result<Self> {
        let file: FileConfig = match path {
            Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
            None => FileConfig::default(),
        };
        let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());
        let reddit = file.reddit;

        if file.http.timeout_secs == 0 {
            return Err(common::Error::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        let mut endpoints = Endpoints::default();
        if let Some(url) = reddit.token_url {
            endpoints.token_url = validate_url("token_url", url)?;
        }
        if let Some(url) = reddit.api_base {
            endpoints.api_base = validate_url("api_base", url)?;
        }

        let client_id = env("REDDIT_CLIENT_ID")
            .or(reddit.client_id)
            .ok_or(common::Error::MissingCredential("client_id"))?;
        let username = env("REDDIT_USERNAME")
            .or(reddit.username)
            .ok_or(common::Error::MissingCredential("username"))?;
        let user_agent = env("REDDIT_USER_AGENT")
            .or(reddit.user_agent)
            .ok_or(common::Error::MissingCredential("user_agent"))?;

        let client_secret = resolve_secret(
            env("REDDIT_CLIENT_SECRET"),
            reddit.client_secret_file.as_deref(),
        )?
        .ok_or(common::Error::MissingCredential("client_secret"))?;
        let password = resolve_secret(env("REDDIT_PASSWORD"), reddit.password_file.as_deref())?
            .ok_or(common::Error::MissingCredential("password"))?;

        Ok(Self {
            credentials: Credentials {
                client_id,
                client_secret,
                username,
                password,
                user_agent,
            },
            endpoints,
            timeout: Duration::from_secs(file.http.timeout_secs),
        })
    }

    /// Resolve config file path from CLI arg, CONFIG_PATH env var, or the
    /// default file in the working directory. `None` means environment only.
    pub fn resolve_path(cli_path: Option<&str>) -> Option<PathBuf> {
        if let Some(p) = cli_path {
            return Some(PathBuf::from(p));
        }
        if let Ok(p) = std::env::var("CONFIG_PATH") {
            return Some(PathBuf::from(p));
        }
        let default = PathBuf::from(DEFAULT_CONFIG_FILE);
        default.exists().then_some(default)
    }
}

/// Env var takes precedence over the secret file.
fn resolve_secret(from_env: Option<String>, file: Option<&Path>) -> common::Result<Option<Secret>> {
    if let Some(value) = from_env {
        return Ok(Some(Secret::new(value)));
    }
    match file {
        Some(path) => Secret::from_file(path),
        None => Ok(None),
    }
}

fn validate_url(field: &str, url: String) -> common::Result<String> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(common::Error::Config(format!(
            "{field} must start with http:// or https://, got: {url}"
        )));
    }
    Ok(url)
}
