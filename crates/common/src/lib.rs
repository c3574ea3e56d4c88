//! Shared types for the Reddit auth check workspace

mod error;
mod secret;

pub use error::{Error, Result};
pub use secret::Secret;
