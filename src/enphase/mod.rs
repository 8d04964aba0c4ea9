//! # Enphase Integration Module
//!
//! This module provides the client-side interface to the Enphase energy
//! monitoring API. It handles the two upstream interactions the proxy
//! depends on: the OAuth2 refresh-token exchange and the authenticated
//! system summary fetch.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Enphase API functionality:
//!
//! ```text
//! Application Layer (CLI, Management, HTTP handlers)
//!          ↓
//! Enphase Integration Layer
//!     ├── Authentication (OAuth 2.0 refresh grant)
//!     └── Summary Retrieval (production/consumption totals)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Enphase API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the confidential-client refresh exchange:
//! - **Refresh Grant**: `grant_type=refresh_token` with client id and secret
//! - **Partial Responses**: tolerates servers that omit `refresh_token`
//!   (no rotation) or `expires_in`
//! - **Typed Failures**: rejected or malformed responses surface as
//!   [`crate::error::AuthError::RefreshFailed`] with the upstream detail
//!
//! ### Summary Module
//!
//! [`summary`] - Retrieves production/consumption totals for one system:
//! - **Bearer Authentication**: access token in the `Authorization` header
//! - **Partial Payloads**: every numeric field is optional; defaulting
//!   happens at the normalization boundary in [`crate::types`]
//! - **No Retry**: upstream failures are reported to the caller untouched
//!
//! ## API Coverage
//!
//! - `POST /oauth/token` - refresh-token exchange
//! - `GET /systems/{system_id}/summary` - system summary
//!
//! ## Error Types
//!
//! All functions return `Result` types with specific error handling:
//! - **[`crate::error::AuthError`]** - token refresh failures
//! - **[`crate::error::FetchError`]** - summary fetch failures

pub mod auth;
pub mod summary;
