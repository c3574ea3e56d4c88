//! Secret wrapper for credential material
//!
//! Client secrets, account passwords and bearer tokens travel through the
//! check as `Secret`. The value never shows up in Debug/Display output or in
//! log fields, and the buffer is zeroed when dropped.

use std::fmt;
use std::path::Path;

use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Sensitive string - redacted in Debug/Display/logs
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Read a secret from a file, trimming surrounding whitespace.
    ///
    /// Blank files yield `None` so the caller can fall through to the next
    /// source or report the credential as missing.
    pub fn from_file(path: &Path) -> Result<Option<Self>> {
        let mut raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read secret file {}: {e}", path.display()))
        })?;
        let trimmed = raw.trim();
        let secret = if trimmed.is_empty() {
            None
        } else {
            Some(Self::new(trimmed))
        };
        raw.zeroize();
        Ok(secret)
    }

    /// Expose the inner value (use sparingly)
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl Clone for Secret {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
