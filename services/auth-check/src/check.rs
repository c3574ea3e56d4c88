//! The login diagnostic
//!
//! One linear pass: build a session, ask who it is, and if that works, read
//! one subreddit. Every failure is folded into a `LoginOutcome`; nothing
//! propagates past `run_check`. The subreddit read is a nested result that
//! never changes the outer verdict.

use platform::{Credentials, Platform, PlatformError, SubredditHandle};
use reddit_auth::PROBE_SUBREDDIT;
use tracing::{info, instrument, warn};

/// Verdict of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The session resolved to an account.
    Success {
        identity: String,
        client_id: String,
        user_agent: String,
        subreddit: SubredditCheck,
    },
    /// The identity query completed but named no account.
    NoIdentity,
    /// Session construction or the identity query failed.
    AuthError { message: String, kind: String },
}

/// Result of the follow-up subreddit read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubredditCheck {
    Accessible(SubredditHandle),
    Failed(PlatformError),
}

impl LoginOutcome {
    fn from_error(err: PlatformError) -> Self {
        LoginOutcome::AuthError {
            message: err.message,
            kind: err.kind,
        }
    }
}

/// Run the diagnostic once against `platform`.
#[instrument(skip_all, fields(platform = platform.id(), client_id = %credentials.client_id))]
pub async fn run_check(platform: &dyn Platform, credentials: &Credentials) -> LoginOutcome {
    let session = match platform.connect(credentials).await {
        Ok(session) => session,
        Err(err) => {
            info!(kind = %err.kind, error = %err, "session construction failed");
            return LoginOutcome::from_error(err);
        }
    };

    let identity = match session.identity().await {
        Ok(identity) => identity.filter(|name| !name.is_empty()),
        Err(err) => {
            info!(kind = %err.kind, error = %err, "identity query failed");
            return LoginOutcome::from_error(err);
        }
    };

    let Some(identity) = identity else {
        info!("identity query returned no account");
        return LoginOutcome::NoIdentity;
    };
    info!(%identity, "login succeeded");

    let subreddit = match session.subreddit(PROBE_SUBREDDIT).await {
        Ok(handle) => SubredditCheck::Accessible(handle),
        Err(err) => {
            warn!(subreddit = PROBE_SUBREDDIT, kind = %err.kind, error = %err, "subreddit read failed");
            SubredditCheck::Failed(err)
        }
    };

    LoginOutcome::Success {
        identity,
        client_id: credentials.client_id.clone(),
        user_agent: credentials.user_agent.clone(),
        subreddit,
    }
}
