//! # API Module
//!
//! This module provides the HTTP endpoints exposed by the proxy server.
//!
//! ## Endpoints
//!
//! ### Summary
//!
//! - [`enphase_summary`] - Serves the normalized production/consumption
//!   summary for the configured system. Each request runs the credential
//!   check (refreshing the access token when expired) before the upstream
//!   fetch; any failure collapses into a single generic error response.
//!
//! ### Monitoring
//!
//! - [`root`] - Plain-text liveness endpoint.
//! - [`health`] - Health check endpoint returning application status and
//!   version information for monitoring systems and load balancers.
//!
//! ## Error Contract
//!
//! The summary endpoint does not distinguish auth failures from fetch
//! failures to the caller: both are logged locally and answered with
//! `500 {"error": "Failed to load Enphase data"}`. Every failure path
//! produces a well-formed HTTP response.
//!
//! ## Related Modules
//!
//! - [`crate::enphase`] - Enphase API integration
//! - [`crate::management`] - Credential state management
//! - [`crate::server`] - Router construction and server startup

mod health;
mod summary;

pub use health::health;
pub use health::root;
pub use summary::enphase_summary;
