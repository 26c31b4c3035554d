#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Vulnerability dataset management.
//!
//! Fetches the sector feature collection and the district list from the
//! backend, holds them for the lifetime of the UI session, and exposes
//! the pure queries (best sector within a district, district listing)
//! the selection and ranking logic are built on.

pub mod fetch;
pub mod queries;
pub mod store;

use thiserror::Error;

pub use store::{GeoDataStore, LoadState};

/// Errors that can occur during geography operations.
#[derive(Debug, Error)]
pub enum GeoError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend answered with a non-success status.
    #[error("Backend error: HTTP {status}: {body}")]
    Backend {
        /// HTTP status code.
        status: u16,
        /// Raw response body, truncated for logging.
        body: String,
    },
}
