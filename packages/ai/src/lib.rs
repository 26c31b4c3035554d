#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Recommendation provider abstraction.
//!
//! The backend exposes one LLM-backed endpoint that turns a selected
//! sector's attributes into a human-readable mitigation recommendation.
//! The [`RecommendationProvider`] trait is the seam between the
//! suggestion flow and that endpoint; [`BackendProvider`] is the real
//! HTTP implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vuln_map_geography_models::{FilterLens, SectorProperties};

/// Errors that can occur while requesting a recommendation.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to the backend failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend answered with a non-success status.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },
}

/// Body of `POST /api/llm`.
///
/// The sector's full property bag is spread at the top level, with the
/// selected district name and the active lens merged in alongside it.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRequest {
    /// Selected sector attributes, flattened into the payload.
    #[serde(flatten)]
    pub sector: SectorProperties,
    /// Selected district name, if a district filter is active.
    pub selected_bairro: Option<String>,
    /// Active thematic lens.
    pub filter: FilterLens,
}

/// Body of a successful `POST /api/llm` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationResponse {
    /// The generated analysis, if the backend produced one.
    pub analysis_text: Option<String>,
}

/// Something that can turn a sector into a recommendation.
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Requests a recommendation for the given sector and context.
    ///
    /// # Errors
    ///
    /// Returns [`AiError`] on network failure, non-success status, or an
    /// undecodable response body.
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, AiError>;
}

/// HTTP provider backed by the map backend's `/api/llm` endpoint.
pub struct BackendProvider {
    base_url: String,
    client: reqwest::Client,
}

impl BackendProvider {
    /// Creates a provider for the given backend base URL.
    #[must_use]
    pub fn new(base_url: String, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for BackendProvider {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, AiError> {
        let url = format!("{}/api/llm", self.base_url);
        log::debug!(
            "requesting recommendation for {} (filter: {})",
            request.sector.district_name(),
            request.filter
        );

        let resp = self.client.post(&url).json(request).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(AiError::Provider {
                message: format!("HTTP {status}: {body}"),
            });
        }

        let response: RecommendationResponse = serde_json::from_str(&body)?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_spreads_the_property_bag() {
        let mut sector = SectorProperties {
            district: Some("Boa Viagem".to_string()),
            vulnerability_index: Some(0.85),
            ..SectorProperties::default()
        };
        sector
            .extra
            .insert("CD_SETOR".to_string(), serde_json::Value::from("x1"));

        let request = RecommendationRequest {
            sector,
            selected_bairro: Some("Boa Viagem".to_string()),
            filter: FilterLens::Heat,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["NM_BAIRRO"], "Boa Viagem");
        assert_eq!(value["indice_vulnerabilidade"], 0.85);
        assert_eq!(value["CD_SETOR"], "x1");
        assert_eq!(value["selected_bairro"], "Boa Viagem");
        assert_eq!(value["filter"], "heat");
    }

    #[test]
    fn response_tolerates_a_missing_analysis() {
        let response: RecommendationResponse = serde_json::from_str("{}").unwrap();

        assert!(response.analysis_text.is_none());
    }
}
