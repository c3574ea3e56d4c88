//! Reddit auth check
//!
//! Single-shot diagnostic that:
//! 1. Logs in as a script app with the configured credentials
//! 2. Asks the API which account the session belongs to
//! 3. Reads r/test to confirm access beyond the identity endpoint
//! 4. Prints the verdict on stdout
//!
//! The exit status is 0 whatever the verdict; only configuration errors
//! (before the check runs) exit non-zero.

mod check;
mod config;
mod platform_impl;
mod report;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::platform_impl::RedditPlatform;

/// CLI: simple --config flag parsing. A trailing `--config` with no path is an error.
fn config_flag(args: &[String]) -> Result<Option<&str>> {
    let Some(i) = args.iter().position(|a| a == "--config") else {
        return Ok(None);
    };
    match args.get(i + 1) {
        Some(path) if !path.starts_with("--") => Ok(Some(path.as_str())),
        _ => anyhow::bail!("--config requires a path argument"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // JSON logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cli_config_path = config_flag(&args)?;

    let config_path = Config::resolve_path(cli_config_path);
    let config = match &config_path {
        Some(path) => Config::load(Some(path.as_path()))
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load(None).context("failed to load config from environment")?,
    };

    info!(
        client_id = %config.credentials.client_id,
        username = %config.credentials.username,
        token_url = %config.endpoints.token_url,
        api_base = %config.endpoints.api_base,
        timeout_secs = config.timeout.as_secs(),
        "configuration loaded"
    );

    let platform = RedditPlatform::new(config.endpoints.clone(), config.timeout);

    let mut stdout = std::io::stdout();
    report::write_banner(&mut stdout)?;
    stdout.flush()?;

    let outcome = check::run_check(&platform, &config.credentials).await;

    report::write_outcome(&mut stdout, &outcome)?;
    stdout.flush()?;

    Ok(())
}
