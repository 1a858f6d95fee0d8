//! Configuration management for lineupcli.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files. Values are read once into a [`Config`] which
//! is then passed by reference into the catalog client; nothing in the core
//! reads the environment on its own.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf};

use crate::error::{Error, Result};

/// Default base URL of the Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default URL of the Spotify client-credentials token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `lineupcli/.env`.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/lineupcli/.env`
/// - macOS: `~/Library/Application Support/lineupcli/.env`
/// - Windows: `%LOCALAPPDATA%/lineupcli/.env`
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the `.env`
/// file exists but cannot be parsed. A missing file is not an error, the
/// process environment is used as is.
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)
        .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))?;
    Ok(())
}

/// Path of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lineupcli/.env");
    path
}

/// Process-wide settings, constructed once at startup.
///
/// The `Debug` output never includes `client_secret`.
#[derive(Clone)]
pub struct Config {
    /// `SPOTIFY_CLIENT_ID`
    pub client_id: String,
    /// `SPOTIFY_CLIENT_SECRET`
    pub client_secret: String,
    /// `SPOTIFY_USER_ID`, prompted for when absent.
    pub user_id: Option<String>,
    /// `SPOTIFY_API_URL`, without a trailing slash.
    pub api_url: String,
    /// `SPOTIFY_API_TOKEN_URL`
    pub token_url: String,
    /// `LINEUP_FILE`
    pub lineup_file: Option<PathBuf>,
}

impl Config {
    /// Builds a configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `SPOTIFY_CLIENT_ID` or
    /// `SPOTIFY_CLIENT_SECRET` is missing or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            user_id: optional("SPOTIFY_USER_ID"),
            api_url: optional("SPOTIFY_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            token_url: optional("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            lineup_file: optional("LINEUP_FILE").map(PathBuf::from),
        })
    }

    /// Builds a configuration with explicit credentials and default endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_id: None,
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            lineup_file: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("user_id", &self.user_id)
            .field("api_url", &self.api_url)
            .field("token_url", &self.token_url)
            .field("lineup_file", &self.lineup_file)
            .finish()
    }
}

fn required(key: &str) -> Result<String> {
    optional(key).ok_or_else(|| Error::Configuration(format!("{} must be set", key)))
}

// empty values count as unset, .env.example ships them blank
fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
