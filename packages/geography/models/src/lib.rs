#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Sector and district types for the vulnerability map.
//!
//! These types mirror the GeoJSON-like payload served by the backend:
//! a feature collection of census sectors, each carrying a precomputed
//! heat-vulnerability index and supporting attributes. Geometry is kept
//! as opaque JSON; none of the client logic reads it.

pub mod lens;

use serde::{Deserialize, Serialize};

pub use lens::FilterLens;

/// Fallback district label for sectors missing `NM_BAIRRO`.
pub const UNKNOWN_DISTRICT: &str = "Desconhecido";

/// The property bag of one census sector.
///
/// Known fields are typed; everything else the backend attaches is kept
/// in `extra` so the full bag survives a round-trip into the
/// recommendation request payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectorProperties {
    /// District (bairro) this sector belongs to.
    #[serde(rename = "NM_BAIRRO", skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Precomputed heat-vulnerability index, expected range [0, 1].
    #[serde(
        rename = "indice_vulnerabilidade",
        skip_serializing_if = "Option::is_none"
    )]
    pub vulnerability_index: Option<f64>,
    /// Estimated mean surface temperature in °C.
    #[serde(
        rename = "temperatura_media_estimada",
        skip_serializing_if = "Option::is_none"
    )]
    pub mean_temperature: Option<f64>,
    /// Population density in people/km².
    #[serde(rename = "densidade_pop", skip_serializing_if = "Option::is_none")]
    pub population_density: Option<f64>,
    /// Any additional backend-provided properties, passed through verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SectorProperties {
    /// The vulnerability score, with missing values treated as zero.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.vulnerability_index.unwrap_or(0.0)
    }

    /// District name, or [`UNKNOWN_DISTRICT`] when absent.
    #[must_use]
    pub fn district_name(&self) -> &str {
        self.district.as_deref().unwrap_or(UNKNOWN_DISTRICT)
    }

    /// Whether this sector belongs to the given district.
    #[must_use]
    pub fn in_district(&self, name: &str) -> bool {
        self.district.as_deref() == Some(name)
    }
}

/// One GeoJSON feature: opaque geometry plus the sector property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Raw geometry, untouched by client logic.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub geometry: serde_json::Value,
    /// Sector attributes.
    #[serde(default)]
    pub properties: SectorProperties,
}

/// The full dataset fetched once at startup.
///
/// Source order is significant: score ties are broken by first
/// occurrence in this sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// All sector features, in backend order.
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Number of sectors in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the dataset contains no sectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// A ranked district row: display data plus the property bag needed to
/// select the sector directly from a ranking entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictSummary {
    /// District name.
    pub name: String,
    /// Representative vulnerability score.
    pub score: f64,
    /// Full property bag of the underlying sector.
    pub properties: SectorProperties,
}

impl DistrictSummary {
    /// Score formatted for display, three decimal places.
    #[must_use]
    pub fn formatted_score(&self) -> String {
        format!("{:.3}", self.score)
    }
}

/// One row of `GET /api/bairros/summary`, used to populate the district
/// dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictEntry {
    /// District name.
    #[serde(rename = "NM_BAIRRO")]
    pub name: String,
}
