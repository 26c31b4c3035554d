#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District and sector selection state.
//!
//! Keeps the dropdown-driven district choice and the map-driven sector
//! choice in sync: picking a district auto-selects its most vulnerable
//! sector (so the recommendation flow always has a concrete sector to
//! reason about), while a direct polygon or ranking click overrides the
//! sector unconditionally.

use vuln_map_geography::queries;
use vuln_map_geography_models::{FeatureCollection, SectorProperties};

/// Current district/sector selection.
///
/// When a district is selected, the sector is (re)derived as that
/// district's highest-scoring sector on every district or dataset
/// change. A direct [`select_sector`](SelectionController::select_sector)
/// call may let the two diverge; the derived invariant is re-established
/// at the next district or dataset change.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected_district: Option<String>,
    selected_sector: Option<SectorProperties>,
}

impl SelectionController {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected_district: None,
            selected_sector: None,
        }
    }

    /// Selects a district, or clears the selection.
    ///
    /// An absent or empty name is a reset: it always clears the sector
    /// too. Selecting a district recomputes the sector as the district's
    /// highest-scoring feature; an absent dataset or a district with no
    /// sectors leaves the sector unselected.
    pub fn select_district(&mut self, name: Option<&str>, data: Option<&FeatureCollection>) {
        match name.filter(|n| !n.is_empty()) {
            None => {
                self.selected_district = None;
                self.selected_sector = None;
            }
            Some(district) => {
                self.selected_district = Some(district.to_string());
                self.recompute_best_sector(data);
            }
        }
    }

    /// Directly selects a sector (map polygon or ranking entry click).
    ///
    /// Unconditional: does not touch the district selection.
    pub fn select_sector(&mut self, properties: Option<SectorProperties>) {
        self.selected_sector = properties;
    }

    /// Re-derives the best sector after the dataset arrives or changes.
    ///
    /// No-op when no district is selected.
    pub fn data_changed(&mut self, data: Option<&FeatureCollection>) {
        if self.selected_district.is_some() {
            self.recompute_best_sector(data);
        }
    }

    /// The currently selected sector's properties, if any.
    #[must_use]
    pub const fn current_sector(&self) -> Option<&SectorProperties> {
        self.selected_sector.as_ref()
    }

    /// The currently selected district name, if any.
    #[must_use]
    pub fn selected_district(&self) -> Option<&str> {
        self.selected_district.as_deref()
    }

    fn recompute_best_sector(&mut self, data: Option<&FeatureCollection>) {
        let district = self.selected_district.as_deref();

        self.selected_sector = match (district, data) {
            (Some(district), Some(data)) => {
                let best = queries::best_sector_in(data, district).cloned();
                if best.is_none() {
                    log::debug!("district {district} has no sectors in the dataset");
                }
                best
            }
            _ => None,
        };
    }
}
