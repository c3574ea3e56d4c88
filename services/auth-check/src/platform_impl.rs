//! `Platform` implementation backed by the Reddit OAuth API

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use platform::{Credentials, Platform, PlatformError, Session, SubredditHandle};
use reddit_auth::{Endpoints, PasswordGrant, RedditClient, build_http_client};
use tracing::debug;

pub struct RedditPlatform {
    endpoints: Endpoints,
    timeout: Duration,
}

impl RedditPlatform {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Self {
        Self { endpoints, timeout }
    }
}

fn platform_error(err: reddit_auth::Error) -> PlatformError {
    PlatformError::new(err.kind(), err.to_string())
}

impl Platform for RedditPlatform {
    fn id(&self) -> &str {
        "reddit"
    }

    fn connect<'a>(
        &'a self,
        credentials: &'a Credentials,
    ) -> Pin<Box<dyn Future<Output = platform::Result<Box<dyn Session>>> + Send + 'a>> {
        Box::pin(async move {
            let http = build_http_client(&credentials.user_agent, self.timeout)
                .map_err(platform_error)?;
            let grant = PasswordGrant {
                client_id: &credentials.client_id,
                client_secret: credentials.client_secret.expose(),
                username: &credentials.username,
                password: credentials.password.expose(),
            };
            let client = RedditClient::login(http, &self.endpoints, &grant)
                .await
                .map_err(platform_error)?;
            debug!(username = %credentials.username, "session established");
            Ok(Box::new(RedditSession { client }) as Box<dyn Session>)
        })
    }
}

struct RedditSession {
    client: RedditClient,
}

impl Session for RedditSession {
    fn identity(
        &self,
    ) -> Pin<Box<dyn Future<Output = platform::Result<Option<String>>> + Send + '_>> {
        Box::pin(async move { self.client.me().await.map_err(platform_error) })
    }

    fn subreddit<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn Future<Output = platform::Result<SubredditHandle>> + Send + 'a>> {
        Box::pin(async move {
            let subreddit = self.client.subreddit(name).await.map_err(platform_error)?;
            Ok(SubredditHandle {
                name: subreddit.display_name,
                subscribers: subreddit.subscribers,
            })
        })
    }
}
