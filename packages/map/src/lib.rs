#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map presentation derivations.
//!
//! Pure functions from the dataset + selection state to what the map
//! layer needs: a per-feature choropleth style and the ranked list of
//! most affected districts. Nothing here holds state or mutates the
//! dataset.

pub mod popup;
pub mod ranking;
pub mod style;

pub use popup::sector_popup;
pub use ranking::{DEFAULT_RANKING_SIZE, top_districts};
pub use style::{StyleDescriptor, StylePalette};
