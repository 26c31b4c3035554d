//! Suggestion flow state machine.
//!
//! `Idle → NotificationShown → AwaitingResponse → ResultShown → Idle`.
//! Choosing a filter lens only surfaces a call-to-action; the
//! recommendation request happens when the user accepts it. Closing
//! from any state returns to `Idle`.

use vuln_map_ai::{AiError, RecommendationProvider, RecommendationRequest};
use vuln_map_geography_models::{FilterLens, SectorProperties};

/// Shown when the user asks for a recommendation with no sector selected.
pub const MSG_SELECT_SECTOR: &str = "Selecione um setor no mapa primeiro!";

/// Shown when the recommendation request fails, for any reason.
pub const MSG_RETRY: &str = "Erro na análise. Tente novamente.";

/// Shown when the backend answers without usable analysis text.
pub const MSG_FALLBACK: &str = "Análise gerada pela IA.";

/// Where the suggestion flow currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    /// Nothing shown.
    Idle,
    /// The call-to-action popup is visible.
    NotificationShown,
    /// A recommendation request is in flight.
    AwaitingResponse,
    /// The result popup is visible with the given text.
    ResultShown(String),
}

/// Drives the notification → request → result sequence.
///
/// Concurrent accepts are not coordinated: each response overwrites the
/// displayed text, last write wins.
#[derive(Debug, Clone)]
pub struct SuggestionFlow {
    state: FlowState,
    active_lens: FilterLens,
}

impl SuggestionFlow {
    /// Creates an idle flow with the default lens.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: FlowState::Idle,
            active_lens: FilterLens::Heat,
        }
    }

    /// Handles a filter-card click: records the lens and shows the
    /// call-to-action, unconditionally.
    pub fn open(&mut self, lens: FilterLens) {
        self.active_lens = lens;
        self.state = FlowState::NotificationShown;
    }

    /// Handles the user accepting the call-to-action.
    ///
    /// With no sector selected, skips the network entirely and shows the
    /// fixed guidance message. Otherwise issues the recommendation
    /// request and shows the analysis text, the fallback text when the
    /// response carries none, or the fixed retry message on failure.
    /// Failures are swallowed here; they never propagate.
    pub async fn accept(
        &mut self,
        provider: &dyn RecommendationProvider,
        sector: Option<&SectorProperties>,
        district: Option<&str>,
    ) {
        let Some(sector) = sector else {
            self.state = FlowState::ResultShown(MSG_SELECT_SECTOR.to_string());
            return;
        };

        self.state = FlowState::AwaitingResponse;

        let request = RecommendationRequest {
            sector: sector.clone(),
            selected_bairro: district.map(ToString::to_string),
            filter: self.active_lens,
        };

        let text = match provider.recommend(&request).await {
            Ok(response) => response
                .analysis_text
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| MSG_FALLBACK.to_string()),
            Err(err) => {
                log_request_failure(&err);
                MSG_RETRY.to_string()
            }
        };

        self.state = FlowState::ResultShown(text);
    }

    /// Handles the close button: hides both popups.
    pub fn close(&mut self) {
        self.state = FlowState::Idle;
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &FlowState {
        &self.state
    }

    /// The lens recorded by the last filter-card click.
    #[must_use]
    pub const fn active_lens(&self) -> FilterLens {
        self.active_lens
    }

    /// Whether the call-to-action popup is visible.
    #[must_use]
    pub fn is_notification_shown(&self) -> bool {
        self.state == FlowState::NotificationShown
    }

    /// The result popup text, if the result popup is visible.
    #[must_use]
    pub fn result_text(&self) -> Option<&String> {
        match &self.state {
            FlowState::ResultShown(text) => Some(text),
            _ => None,
        }
    }
}

impl Default for SuggestionFlow {
    fn default() -> Self {
        Self::new()
    }
}

fn log_request_failure(err: &AiError) {
    log::error!("recommendation request failed: {err}");
}
