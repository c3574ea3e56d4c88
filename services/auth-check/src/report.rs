//! Console rendering of a `LoginOutcome`
//!
//! Output is line-oriented text on stdout. Rendering is a pure function of
//! the outcome, so two identical outcomes always print identically.

use std::io::{self, Write};

use crate::check::{LoginOutcome, SubredditCheck};

/// Fixed troubleshooting hints printed after an authentication error.
pub const HINTS: [&str; 3] = [
    "Check that the credentials are correct",
    "Make sure the app is registered as a 'script' app on Reddit",
    "Check that the username and password are valid",
];

/// Banner printed before any network call is made.
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Testing Reddit API authentication...")?;
    writeln!(out, "{}", "=".repeat(50))
}

pub fn write_outcome(out: &mut impl Write, outcome: &LoginOutcome) -> io::Result<()> {
    match outcome {
        LoginOutcome::Success {
            identity,
            client_id,
            user_agent,
            subreddit,
        } => {
            writeln!(out, "Login successful!")?;
            writeln!(out, "Authenticated user: {identity}")?;
            writeln!(out, "Client ID: {client_id}")?;
            writeln!(out, "User agent: {user_agent}")?;
            match subreddit {
                SubredditCheck::Accessible(handle) => match handle.subscribers {
                    Some(count) => writeln!(
                        out,
                        "Subreddit access: OK (r/{}, {count} subscribers)",
                        handle.name
                    ),
                    None => writeln!(out, "Subreddit access: OK (r/{})", handle.name),
                },
                SubredditCheck::Failed(err) => {
                    writeln!(out, "Warning: subreddit access failed: {}", err.message)
                }
            }
        }
        LoginOutcome::NoIdentity => {
            writeln!(out, "Login failed: could not retrieve user information")
        }
        LoginOutcome::AuthError { message, kind } => {
            writeln!(out, "Error authenticating with Reddit API:")?;
            writeln!(out, "   Error: {message}")?;
            writeln!(out, "   Kind: {kind}")?;
            writeln!(out)?;
            writeln!(out, "Debugging information:")?;
            for hint in HINTS {
                writeln!(out, "   - {hint}")?;
            }
            Ok(())
        }
    }
}
