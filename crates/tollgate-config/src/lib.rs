//! Configuration loading for Tollgate clients.
//!
//! TOML profiles plus environment overrides, credential resolution
//! (env + plaintext), and translation to `tollgate::ClientOptions`.
//! The client crates never read files; callers that want profiles go
//! through this crate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tollgate::{ClientOptions, TransportConfig};

/// Environment variable that overrides every profile's token.
pub const API_TOKEN_ENV: &str = "TOLLGATE_API_TOKEN";

/// Environment variable that overrides every profile's base path.
pub const BASE_PATH_ENV: &str = "TOLLGATE_BASE_PATH";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no API token configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("unknown profile '{profile}'")]
    UnknownProfile { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// A named API profile (e.g. production vs. staging).
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// API base path. Falls back to the production address.
    pub base_path: Option<String>,

    /// API token (plaintext -- prefer an env var).
    pub api_token: Option<String>,

    /// Environment variable name containing the API token.
    pub api_token_env: Option<String>,

    /// Override the default timeout.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("link", "tollgate", "tollgate").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("tollgate");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// Environment keys use `__` as the nesting separator, e.g.
/// `TOLLGATE_DEFAULTS__TIMEOUT=10` or `TOLLGATE_DEFAULT_PROFILE=staging`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("TOLLGATE_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is invalid.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(&config_path(), cfg)
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the API token from the credential chain.
///
/// Order: `TOLLGATE_API_TOKEN`, the profile's `api_token_env` variable,
/// then the plaintext `api_token`.
pub fn resolve_api_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Global env override
    if let Some(token) = non_empty_env(API_TOKEN_ENV) {
        return Ok(SecretString::from(token));
    }

    // 2. Profile's api_token_env → env var lookup
    if let Some(token) = profile.api_token_env.as_deref().and_then(non_empty_env) {
        return Ok(SecretString::from(token));
    }

    // 3. Plaintext in config
    if let Some(token) = profile.api_token.as_ref().filter(|t| !t.trim().is_empty()) {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

// ── Translation to ClientOptions ────────────────────────────────────

/// Build `ClientOptions` from a profile.
pub fn profile_to_options(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ClientOptions, ConfigError> {
    let base_path = non_empty_env(BASE_PATH_ENV).or_else(|| profile.base_path.clone());

    if let Some(ref raw) = base_path {
        url::Url::parse(raw).map_err(|e| ConfigError::Validation {
            field: "base_path".into(),
            reason: format!("invalid URL '{raw}': {e}"),
        })?;
    }

    let api_token = resolve_api_token(profile, profile_name)?;
    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(ClientOptions {
        api_token,
        base_path,
        transport: TransportConfig {
            timeout,
            ..TransportConfig::default()
        },
    })
}

/// Pick a profile (explicit name, then `default_profile`, then `"default"`)
/// and build `ClientOptions` from it.
///
/// The default profile may be absent from the file entirely; it is then
/// treated as empty so an env-only setup still works.
pub fn resolve_options(config: &Config, profile: Option<&str>) -> Result<ClientOptions, ConfigError> {
    let name = profile
        .or(config.default_profile.as_deref())
        .unwrap_or("default");

    if let Some(found) = config.profiles.get(name) {
        return profile_to_options(found, name, &config.defaults);
    }

    if profile.is_none() {
        return profile_to_options(&Profile::default(), name, &config.defaults);
    }

    Err(ConfigError::UnknownProfile {
        profile: name.into(),
    })
}
