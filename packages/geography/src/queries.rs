//! Pure queries over the sector dataset.

use vuln_map_geography_models::{Feature, FeatureCollection, SectorProperties};

/// All features belonging to the given district, in source order.
pub fn features_in_district<'a>(
    data: &'a FeatureCollection,
    district: &'a str,
) -> impl Iterator<Item = &'a Feature> {
    data.features
        .iter()
        .filter(move |f| f.properties.in_district(district))
}

/// The highest-scoring sector within a district.
///
/// Missing scores count as zero. Ties are broken by first occurrence in
/// source order: a later sector only wins with a strictly greater score.
/// Returns `None` when no feature belongs to the district.
#[must_use]
pub fn best_sector_in<'a>(
    data: &'a FeatureCollection,
    district: &'a str,
) -> Option<&'a SectorProperties> {
    let mut best: Option<&SectorProperties> = None;

    for feature in features_in_district(data, district) {
        match best {
            Some(current) if feature.properties.score() <= current.score() => {}
            _ => best = Some(&feature.properties),
        }
    }

    best
}

/// Distinct district names, in first-seen order.
///
/// Fallback for the dropdown when the summary endpoint is unavailable.
/// Sectors without a district name are skipped.
#[must_use]
pub fn district_names(data: &FeatureCollection) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for feature in &data.features {
        if let Some(district) = feature.properties.district.as_deref() {
            if !names.iter().any(|n| n == district) {
                names.push(district.to_string());
            }
        }
    }

    names
}
