//! Thematic filter-lens taxonomy.
//!
//! A lens is the thematic category the user is currently exploring. It
//! does not change the underlying dataset; it only tags the pending
//! recommendation request so the backend can slant its analysis.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The active thematic category.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FilterLens {
    /// Urban heat, from ECOSTRESS surface temperature.
    #[default]
    Heat,
    /// Flood exposure, from SRTM terrain + GPM precipitation.
    Flood,
    /// Vegetation cover, from NDVI.
    Green,
    /// Air quality, from OMI/TEMPO.
    Air,
}

impl FilterLens {
    /// All lenses, in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Heat, Self::Flood, Self::Green, Self::Air]
    }

    /// Card title, including the data-source tag.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Heat => "Heat • ECOSTRESS",
            Self::Flood => "Flood • SRTM+GPM",
            Self::Green => "Green • NDVI",
            Self::Air => "Air • OMI/TEMPO",
        }
    }

    /// Card keyword description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Heat => "Temperature, heat, urban heat, islands, comfort, energy",
            Self::Flood => "Flooding, rain, terrain, drainage, vulnerability",
            Self::Green => "Vegetation, green cover, urban health, sustainability",
            Self::Air => "Pollution, quality, emissions, atmosphere, health",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&FilterLens::Heat).unwrap(), r#""heat""#);
        assert_eq!(serde_json::to_string(&FilterLens::Air).unwrap(), r#""air""#);
        assert_eq!(FilterLens::Flood.to_string(), "flood");
    }

    #[test]
    fn parses_from_string() {
        assert_eq!("green".parse::<FilterLens>().unwrap(), FilterLens::Green);
        assert!("smoke".parse::<FilterLens>().is_err());
    }

    #[test]
    fn default_lens_is_heat() {
        assert_eq!(FilterLens::default(), FilterLens::Heat);
    }

    #[test]
    fn every_lens_has_card_metadata() {
        for lens in FilterLens::all() {
            assert!(lens.title().contains('•'));
            assert!(!lens.description().is_empty());
        }
    }
}
