//! Enphase Summary Proxy Library
//!
//! This library implements a small HTTP proxy in front of the Enphase
//! energy-monitoring API. It manages the OAuth2 refresh-token lifecycle for
//! the upstream API and re-exposes system production/consumption summaries
//! in a simplified JSON shape.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints exposed by the proxy server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `enphase` - Enphase API client implementation
//! - `error` - Error types for token refresh and summary fetch failures
//! - `management` - Credential state and token lifecycle management
//! - `server` - HTTP server for the proxy endpoints
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use enphase_proxy::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> enphase_proxy::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod enphase;
pub mod error;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
///
/// # Example
///
/// ```
/// use enphase_proxy::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Starting proxy server...");
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Access token refreshed");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Reserved for unrecoverable
/// startup failures such as missing configuration or an unbindable server
/// address; request handling never uses it.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator for
/// recoverable issues. Failed upstream calls on the request path are logged
/// through this macro before the generic error response is returned.
///
/// # Example
///
/// ```
/// warning!("Token refresh failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
