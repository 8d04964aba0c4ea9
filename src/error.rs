//! Error types for the proxy's upstream interactions.
//!
//! Both enums collapse to the same generic response at the HTTP boundary;
//! the distinction exists for logging and for callers that want to know
//! which stage of the request pipeline failed.

use thiserror::Error;

/// Errors raised by the credential manager during a refresh exchange.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The authorization server rejected the refresh request, or returned a
    /// payload that could not be parsed. Credential state is left untouched.
    #[error("token refresh failed (status {status}): {detail}")]
    RefreshFailed {
        /// HTTP status returned by the token endpoint.
        status: u16,
        /// Upstream error body or parse failure description.
        detail: String,
    },

    /// The refresh request never produced an upstream response.
    #[error("token refresh transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors raised while fetching the system summary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The summary endpoint returned a non-success status, or a body that
    /// could not be parsed.
    #[error("summary fetch failed (status {status}): {body}")]
    UpstreamError {
        /// HTTP status returned by the summary endpoint.
        status: u16,
        /// Upstream error body or parse failure description.
        body: String,
    },

    /// The summary request never produced an upstream response.
    #[error("summary fetch transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
