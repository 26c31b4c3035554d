//! Choropleth style resolution.
//!
//! Maps a sector's vulnerability score and the active district filter to
//! a Leaflet-compatible style descriptor. Sectors outside the selected
//! district get a fixed muted style: that is a dimming effect, not a
//! data encoding.

use serde::Serialize;
use vuln_map_geography_models::SectorProperties;

/// Score above which a sector is painted with the high-vulnerability color.
const HIGH_THRESHOLD: f64 = 0.7;

/// Score above which a sector is painted with the medium-vulnerability color.
const MEDIUM_THRESHOLD: f64 = 0.4;

/// Resolved style for one map polygon.
///
/// Field names serialize to the Leaflet path-options vocabulary the
/// front-end layer consumes directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDescriptor {
    /// Fill color (hex).
    pub fill_color: String,
    /// Border weight in pixels.
    pub weight: u32,
    /// Border opacity.
    pub opacity: f64,
    /// Border color (hex).
    pub color: String,
    /// Border dash pattern (`"0"` for solid).
    pub dash_array: String,
    /// Fill opacity.
    pub fill_opacity: f64,
}

/// Style constants for the choropleth layer.
///
/// The defaults reproduce the production palette; all values are plain
/// fields so a deployment can inject its own.
#[derive(Debug, Clone, PartialEq)]
pub struct StylePalette {
    /// Fill for scores above the high threshold.
    pub high_color: String,
    /// Fill for scores above the medium threshold.
    pub medium_color: String,
    /// Fill for everything else.
    pub low_color: String,
    /// Border color for in-filter sectors.
    pub border_color: String,
    /// Border weight for sectors of the exact selected district.
    pub selected_weight: u32,
    /// Border weight when no district filter is active.
    pub base_weight: u32,
    /// Fill opacity for in-filter sectors.
    pub fill_opacity: f64,
    /// Fill for dimmed sectors.
    pub muted_fill_color: String,
    /// Border color for dimmed sectors.
    pub muted_border_color: String,
    /// Border weight for dimmed sectors.
    pub muted_weight: u32,
    /// Dash pattern for dimmed sectors.
    pub muted_dash_array: String,
    /// Fill opacity for dimmed sectors.
    pub muted_fill_opacity: f64,
}

impl Default for StylePalette {
    fn default() -> Self {
        Self {
            high_color: "#dc2626".to_string(),
            medium_color: "#f59e0b".to_string(),
            low_color: "#10b981".to_string(),
            border_color: "white".to_string(),
            selected_weight: 3,
            base_weight: 2,
            fill_opacity: 0.8,
            muted_fill_color: "#505050".to_string(),
            muted_border_color: "#A0A0A0".to_string(),
            muted_weight: 1,
            muted_dash_array: "4".to_string(),
            muted_fill_opacity: 0.1,
        }
    }
}

impl StylePalette {
    /// Resolves the style for one sector under the current district filter.
    ///
    /// Pure: identical inputs always produce identical output. Callers
    /// re-evaluate for every feature whenever the selected district
    /// changes.
    #[must_use]
    pub fn style_for(
        &self,
        properties: &SectorProperties,
        selected_district: Option<&str>,
    ) -> StyleDescriptor {
        let is_selected =
            selected_district.is_some_and(|district| properties.in_district(district));

        if selected_district.is_none() || is_selected {
            let score = properties.score();
            let fill_color = if score > HIGH_THRESHOLD {
                &self.high_color
            } else if score > MEDIUM_THRESHOLD {
                &self.medium_color
            } else {
                &self.low_color
            };

            StyleDescriptor {
                fill_color: fill_color.clone(),
                weight: if is_selected {
                    self.selected_weight
                } else {
                    self.base_weight
                },
                opacity: 1.0,
                color: self.border_color.clone(),
                dash_array: "0".to_string(),
                fill_opacity: self.fill_opacity,
            }
        } else {
            StyleDescriptor {
                fill_color: self.muted_fill_color.clone(),
                weight: self.muted_weight,
                opacity: 1.0,
                color: self.muted_border_color.clone(),
                dash_array: self.muted_dash_array.clone(),
                fill_opacity: self.muted_fill_opacity,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sector(district: &str, score: f64) -> SectorProperties {
        SectorProperties {
            district: Some(district.to_string()),
            vulnerability_index: Some(score),
            ..SectorProperties::default()
        }
    }

    #[test]
    fn score_buckets() {
        let palette = StylePalette::default();

        let high = palette.style_for(&sector("Pina", 0.71), None);
        let medium = palette.style_for(&sector("Pina", 0.7), None);
        let low = palette.style_for(&sector("Pina", 0.4), None);

        assert_eq!(high.fill_color, "#dc2626");
        assert_eq!(medium.fill_color, "#f59e0b");
        assert_eq!(low.fill_color, "#10b981");
    }

    #[test]
    fn missing_score_falls_into_the_low_bucket() {
        let palette = StylePalette::default();
        let props = SectorProperties {
            district: Some("Pina".to_string()),
            ..SectorProperties::default()
        };

        assert_eq!(palette.style_for(&props, None).fill_color, "#10b981");
    }

    #[test]
    fn no_filter_uses_the_thinner_border() {
        let palette = StylePalette::default();
        let style = palette.style_for(&sector("Pina", 0.9), None);

        assert_eq!(style.weight, 2);
        assert_eq!(style.fill_opacity, 0.8);
        assert_eq!(style.dash_array, "0");
    }

    #[test]
    fn selected_district_gets_the_thicker_border() {
        let palette = StylePalette::default();
        let style = palette.style_for(&sector("Pina", 0.9), Some("Pina"));

        assert_eq!(style.weight, 3);
        assert_eq!(style.fill_color, "#dc2626");
    }

    #[test]
    fn other_districts_are_dimmed_regardless_of_score() {
        let palette = StylePalette::default();
        let style = palette.style_for(&sector("Pina", 0.99), Some("Boa Viagem"));

        assert_eq!(style.fill_color, "#505050");
        assert_eq!(style.weight, 1);
        assert_eq!(style.color, "#A0A0A0");
        assert_eq!(style.dash_array, "4");
        assert!((style.fill_opacity - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn style_resolution_is_pure() {
        let palette = StylePalette::default();
        let props = sector("Pina", 0.55);

        let first = palette.style_for(&props, Some("Pina"));
        let second = palette.style_for(&props, Some("Pina"));

        assert_eq!(first, second);
    }

    #[test]
    fn serializes_to_leaflet_field_names() {
        let palette = StylePalette::default();
        let value =
            serde_json::to_value(palette.style_for(&sector("Pina", 0.2), None)).unwrap();

        assert_eq!(value["fillColor"], "#10b981");
        assert_eq!(value["dashArray"], "0");
        assert_eq!(value["fillOpacity"], 0.8);
    }
}
