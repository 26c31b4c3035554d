//! Most-affected-districts ranking.

use vuln_map_geography_models::{DistrictSummary, FeatureCollection};

/// How many entries the ranking card shows by default.
pub const DEFAULT_RANKING_SIZE: usize = 5;

/// The top `n` sectors by vulnerability score, as district rows.
///
/// Sorted descending, stable: equal scores keep their source order. The
/// dataset itself is never reordered. Each entry carries the sector's
/// full property bag so a ranking click can select it directly.
#[must_use]
pub fn top_districts(data: &FeatureCollection, n: usize) -> Vec<DistrictSummary> {
    let mut ranked: Vec<DistrictSummary> = data
        .features
        .iter()
        .map(|feature| DistrictSummary {
            name: feature.properties.district_name().to_string(),
            score: feature.properties.score(),
            properties: feature.properties.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(n);

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use vuln_map_geography_models::{Feature, SectorProperties};

    fn sector(district: &str, score: f64) -> Feature {
        Feature {
            geometry: serde_json::Value::Null,
            properties: SectorProperties {
                district: Some(district.to_string()),
                vulnerability_index: Some(score),
                ..SectorProperties::default()
            },
        }
    }

    #[test]
    fn ranks_descending_with_stable_ties() {
        let data = FeatureCollection {
            features: vec![
                sector("A", 0.9),
                sector("B", 0.2),
                sector("C", 0.95),
                sector("D", 0.5),
                sector("E", 0.1),
                sector("F", 0.95),
                sector("G", 0.3),
            ],
        };

        let top = top_districts(&data, 5);

        let names: Vec<&str> = top.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["C", "F", "A", "D", "G"]);
        assert_eq!(top[0].score, 0.95);
    }

    #[test]
    fn does_not_mutate_the_dataset() {
        let data = FeatureCollection {
            features: vec![sector("A", 0.1), sector("B", 0.9)],
        };

        let _ = top_districts(&data, 5);

        assert_eq!(data.features[0].properties.district_name(), "A");
        assert_eq!(data.features[1].properties.district_name(), "B");
    }

    #[test]
    fn truncates_to_n() {
        let data = FeatureCollection {
            features: vec![sector("A", 0.1), sector("B", 0.9), sector("C", 0.5)],
        };

        assert_eq!(top_districts(&data, 2).len(), 2);
        assert_eq!(top_districts(&data, 10).len(), 3);
    }

    #[test]
    fn entries_carry_the_full_property_bag() {
        let mut feature = sector("A", 0.6);
        feature
            .properties
            .extra
            .insert("CD_SETOR".to_string(), serde_json::Value::from("x1"));
        let data = FeatureCollection {
            features: vec![feature],
        };

        let top = top_districts(&data, DEFAULT_RANKING_SIZE);

        assert_eq!(
            top[0].properties.extra.get("CD_SETOR").and_then(|v| v.as_str()),
            Some("x1")
        );
        assert_eq!(top[0].formatted_score(), "0.600");
    }

    #[test]
    fn unnamed_sectors_rank_under_the_unknown_label() {
        let data = FeatureCollection {
            features: vec![Feature {
                geometry: serde_json::Value::Null,
                properties: SectorProperties {
                    vulnerability_index: Some(0.8),
                    ..SectorProperties::default()
                },
            }],
        };

        let top = top_districts(&data, 5);

        assert_eq!(top[0].name, vuln_map_geography_models::UNKNOWN_DISTRICT);
    }
}
