//! Configuration management for chartspot.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the local data directory. Every setting has a workshop default,
//! so the tool runs without any configuration at all.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Built-in defaults

use std::{env, path::PathBuf};

/// Default Spotify Web API base URL.
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Public URL serving the shared workshop token.
pub const DEFAULT_TOKEN_URL: &str = "https://s3.amazonaws.com/mc-workshops/spotify_token.txt";

/// Loads environment variables from `chartspot/.env` in the local data
/// directory.
///
/// The directory is created if needed. A missing `.env` file is not an
/// error: the defaults apply.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/chartspot/.env`
/// - macOS: `~/Library/Application Support/chartspot/.env`
/// - Windows: `%LOCALAPPDATA%/chartspot/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
        log::debug!("loaded configuration from {}", path.display());
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("chartspot/.env");
    path
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the workshop token URL (`CHARTSPOT_TOKEN_URL`).
pub fn token_url() -> String {
    env::var("CHARTSPOT_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns a preconfigured bearer token (`SPOTIFY_TOKEN`), if any.
///
/// Blank values count as unset.
pub fn spotify_token() -> Option<String> {
    env::var("SPOTIFY_TOKEN")
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// The remote locations login and the Spotify operations talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub api_url: String,
    pub token_url: String,
}

impl Endpoints {
    /// Reads both URLs from the environment, falling back to the defaults.
    pub fn from_env() -> Self {
        Self {
            api_url: spotify_apiurl(),
            token_url: token_url(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}
