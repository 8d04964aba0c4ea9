//! # CLI Module
//!
//! This module provides the command-line interface layer for the Enphase
//! summary proxy. Besides running the HTTP server it offers a couple of
//! operational commands for inspecting credential state and fetching a
//! one-shot summary without going through the HTTP surface.
//!
//! ## Commands
//!
//! ### Server
//!
//! - [`serve`] - Starts the proxy server on the configured address.
//!
//! ### Diagnostics
//!
//! - [`summary`] - Performs a single authenticated summary fetch and prints
//!   the normalized result as a table.
//! - [`token`] - Displays the current credential state (with secrets
//!   truncated) and optionally forces a refresh exchange.
//!
//! ## Architecture
//!
//! Each CLI command delegates to the management and API client layers while
//! handling user interaction, progress feedback, and error presentation:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Credential State)
//!     ↓
//! API Layer (Enphase Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Unrecoverable CLI failures terminate through the `error!` macro; the
//! HTTP server never does this on a request path.

mod serve;
mod summary;
mod token;

pub use serve::serve;
pub use summary::summary;
pub use token::token;
