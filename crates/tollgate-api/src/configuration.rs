// ── Client configuration ──
//
// Immutable snapshot of {base path, API token}. Sub-clients hold an
// `Arc<Configuration>` taken at construction time; changing either value
// produces a new snapshot, never an in-place edit.

use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Production API address used when no base path is supplied.
pub const DEFAULT_BASE_PATH: &str = "https://api.tollgate.link/v1";

/// Base path and bearer token for talking to the Tollgate API.
///
/// Only presence is checked here. A malformed base path or a revoked token
/// surfaces from the first remote call that uses it.
#[derive(Debug, Clone)]
pub struct Configuration {
    base_path: String,
    api_token: SecretString,
}

impl Configuration {
    pub fn new(base_path: impl Into<String>, api_token: SecretString) -> Result<Self, Error> {
        let base_path = base_path.into();
        require("base_path", &base_path)?;
        require("api_token", api_token.expose_secret())?;
        Ok(Self {
            base_path,
            api_token,
        })
    }

    /// Configuration pointing at [`DEFAULT_BASE_PATH`].
    pub fn with_default_base_path(api_token: SecretString) -> Result<Self, Error> {
        Self::new(DEFAULT_BASE_PATH, api_token)
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn api_token(&self) -> &SecretString {
        &self.api_token
    }

    /// A new configuration with `api_token` replaced and the base path kept.
    pub fn with_api_token(&self, api_token: SecretString) -> Result<Self, Error> {
        Self::new(self.base_path.clone(), api_token)
    }

    /// A new configuration with `base_path` replaced and the token kept.
    pub fn with_base_path(&self, base_path: impl Into<String>) -> Result<Self, Error> {
        Self::new(base_path, self.api_token.clone())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::MissingConfiguration { field });
    }
    Ok(())
}
