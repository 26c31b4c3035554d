//! Per-sector popup content.

use vuln_map_geography_models::SectorProperties;

/// Fallback popup title for sectors without a district name.
const UNNAMED_SECTOR_LABEL: &str = "Setor";

/// HTML body for a sector's hover popup.
///
/// Mirrors what the map layer binds to each polygon: district name, the
/// index to two decimals, temperature to one, density to zero.
#[must_use]
pub fn sector_popup(properties: &SectorProperties) -> String {
    let name = properties
        .district
        .as_deref()
        .unwrap_or(UNNAMED_SECTOR_LABEL);

    let mut html = format!("<b>{name}</b><br>HVI: {:.2}", properties.score());

    if let Some(temp) = properties.mean_temperature {
        html.push_str(&format!("<br>Temp: {temp:.1}°C"));
    }
    if let Some(density) = properties.population_density {
        html.push_str(&format!("<br>Densidade: {density:.0} hab/km²"));
    }

    html
}
