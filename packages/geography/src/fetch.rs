//! Backend dataset fetchers.
//!
//! Two GET endpoints feed the client: `/api/data` (the full sector
//! feature collection, consumed once at startup) and
//! `/api/bairros/summary` (the district dropdown list). Neither is
//! retried; failure handling is the caller's responsibility.

use vuln_map_geography_models::{DistrictEntry, FeatureCollection};

use crate::GeoError;

/// Maximum response-body length kept in error values and logs.
const ERROR_BODY_MAX_LEN: usize = 500;

/// Fetches the full sector dataset from `GET {base_url}/api/data`.
///
/// # Errors
///
/// Returns [`GeoError`] on network failure, non-success status, or a
/// body that does not decode as a feature collection.
pub async fn fetch_feature_collection(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<FeatureCollection, GeoError> {
    let url = format!("{base_url}/api/data");
    log::info!("fetching dataset from {url}");

    let body = get_success_body(client, &url).await?;
    let data: FeatureCollection = serde_json::from_str(&body)?;

    Ok(data)
}

/// Fetches the district list from `GET {base_url}/api/bairros/summary`.
///
/// # Errors
///
/// Returns [`GeoError`] on network failure, non-success status, or a
/// body that does not decode as a district list.
pub async fn fetch_district_entries(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<DistrictEntry>, GeoError> {
    let url = format!("{base_url}/api/bairros/summary");

    let body = get_success_body(client, &url).await?;
    let entries: Vec<DistrictEntry> = serde_json::from_str(&body)?;

    Ok(entries)
}

/// Issues a GET and returns the body text, mapping non-success statuses
/// to [`GeoError::Backend`].
async fn get_success_body(client: &reqwest::Client, url: &str) -> Result<String, GeoError> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(GeoError::Backend {
            status: status.as_u16(),
            body: truncate_for_log(&body, ERROR_BODY_MAX_LEN),
        });
    }

    Ok(body)
}

/// Truncates a string for logging, appending "..." if it exceeds `max_len`.
fn truncate_for_log(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_for_log("ok", 10), "ok");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let truncated = truncate_for_log("águaáguaágua", 5);

        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 8);
    }
}
