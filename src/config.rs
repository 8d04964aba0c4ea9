//! Configuration management for the Enphase summary proxy.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Enphase API credentials, the
//! bootstrap token pair, server settings, and upstream endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs only)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `enphase-proxy/.env`. When no such file exists
/// the process environment is used as-is (with a `.env` in the working
/// directory as a fallback), which is the common case for hosted deployments
/// where credentials are injected by the platform.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/enphase-proxy/.env`
/// - macOS: `~/Library/Application Support/enphase-proxy/.env`
/// - Windows: `%LOCALAPPDATA%/enphase-proxy/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment is ready, or an error string if
/// directory creation or file parsing fails.
///
/// # Example
///
/// ```
/// use enphase_proxy::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("enphase-proxy/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    } else {
        dotenv::dotenv().ok();
    }
    Ok(())
}

/// Returns the address the proxy server binds to.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies the
/// address and port for the HTTP server, e.g. `0.0.0.0:8080`.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Enphase API client ID.
///
/// Retrieves the `ENPHASE_CLIENT_ID` environment variable which contains the
/// client ID obtained when registering the application with the Enphase
/// developer platform.
///
/// # Panics
///
/// Panics if the `ENPHASE_CLIENT_ID` environment variable is not set.
pub fn enphase_client_id() -> String {
    env::var("ENPHASE_CLIENT_ID").expect("ENPHASE_CLIENT_ID must be set")
}

/// Returns the Enphase API client secret.
///
/// Retrieves the `ENPHASE_CLIENT_SECRET` environment variable. Together with
/// the client ID it authenticates this service against the Enphase token
/// endpoint during refresh exchanges.
///
/// # Panics
///
/// Panics if the `ENPHASE_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn enphase_client_secret() -> String {
    env::var("ENPHASE_CLIENT_SECRET").expect("ENPHASE_CLIENT_SECRET must be set")
}

/// Returns the Enphase system identifier to fetch summaries for.
///
/// Retrieves the `ENPHASE_SYSTEM_ID` environment variable identifying the
/// monitored system. The proxy serves exactly one system.
///
/// # Panics
///
/// Panics if the `ENPHASE_SYSTEM_ID` environment variable is not set.
pub fn enphase_system_id() -> String {
    env::var("ENPHASE_SYSTEM_ID").expect("ENPHASE_SYSTEM_ID must be set")
}

/// Returns the bootstrap access token.
///
/// Retrieves the `ENPHASE_ACCESS_TOKEN` environment variable holding the
/// access token issued during initial authorization. It is only a seed: the
/// credential state starts expired, so the first request always performs a
/// refresh exchange before this value would be used.
///
/// # Panics
///
/// Panics if the `ENPHASE_ACCESS_TOKEN` environment variable is not set.
pub fn enphase_access_token() -> String {
    env::var("ENPHASE_ACCESS_TOKEN").expect("ENPHASE_ACCESS_TOKEN must be set")
}

/// Returns the bootstrap refresh token.
///
/// Retrieves the `ENPHASE_REFRESH_TOKEN` environment variable holding the
/// refresh token issued during initial authorization. Rotated tokens live in
/// process memory only, so a restart falls back to this value.
///
/// # Panics
///
/// Panics if the `ENPHASE_REFRESH_TOKEN` environment variable is not set.
///
/// # Security Note
///
/// The refresh token is a long-lived credential and should be treated with
/// the same care as the client secret.
pub fn enphase_refresh_token() -> String {
    env::var("ENPHASE_REFRESH_TOKEN").expect("ENPHASE_REFRESH_TOKEN must be set")
}

/// Returns the Enphase API base URL.
///
/// Retrieves the `ENPHASE_API_URL` environment variable, defaulting to the
/// public Enphase v4 API when unset. The override exists for tests and
/// staging environments.
pub fn enphase_apiurl() -> String {
    env::var("ENPHASE_API_URL").unwrap_or_else(|_| "https://api.enphaseenergy.com/api/v4".to_string())
}

/// Returns the Enphase OAuth token endpoint URL.
///
/// Retrieves the `ENPHASE_API_TOKEN_URL` environment variable, defaulting to
/// the public Enphase token endpoint when unset. Refresh exchanges are
/// POSTed here.
pub fn enphase_apitoken_url() -> String {
    env::var("ENPHASE_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://api.enphaseenergy.com/oauth/token".to_string())
}
