#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Session orchestration for the vulnerability map client.
//!
//! Ties the dataset store, selection controller, style/ranking
//! derivations, and the suggestion flow into the single event-driven UI
//! session: each public [`Session`] method corresponds to one user
//! interaction handler.

pub mod config;
pub mod flow;
pub mod session;

pub use config::Config;
pub use flow::{FlowState, SuggestionFlow};
pub use session::Session;
