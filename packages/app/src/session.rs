//! The UI session.
//!
//! One [`Session`] per open page. Each public method is the handler for
//! one user interaction or fetch-completion event; handlers run to
//! completion, and the only await points are the three backend requests
//! (dataset, district list, recommendation). Nothing is retried.

use vuln_map_ai::{BackendProvider, RecommendationProvider};
use vuln_map_geography::{GeoDataStore, fetch, queries};
use vuln_map_geography_models::{
    DistrictEntry, DistrictSummary, FeatureCollection, FilterLens, SectorProperties,
};
use vuln_map_map::{StyleDescriptor, StylePalette};
use vuln_map_selection::SelectionController;

use crate::config::Config;
use crate::flow::SuggestionFlow;

/// All client state for one page session.
pub struct Session {
    backend_url: String,
    client: reqwest::Client,
    provider: Box<dyn RecommendationProvider>,
    store: GeoDataStore,
    selection: SelectionController,
    flow: SuggestionFlow,
    palette: StylePalette,
    districts: Vec<DistrictEntry>,
}

impl Session {
    /// Creates a session talking to the configured backend.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::new();
        let provider = Box::new(BackendProvider::new(
            config.backend_url.clone(),
            client.clone(),
        ));

        Self::with_provider(config, client, provider)
    }

    /// Creates a session with a custom recommendation provider.
    #[must_use]
    pub fn with_provider(
        config: &Config,
        client: reqwest::Client,
        provider: Box<dyn RecommendationProvider>,
    ) -> Self {
        Self {
            backend_url: config.backend_url.clone(),
            client,
            provider,
            store: GeoDataStore::new(),
            selection: SelectionController::new(),
            flow: SuggestionFlow::new(),
            palette: StylePalette::default(),
            districts: Vec::new(),
        }
    }

    /// Runs the startup fetches.
    ///
    /// A dataset failure is terminal: the store stays in its failed
    /// state for the rest of the session. A district-list failure only
    /// degrades the dropdown, falling back to names derived from the
    /// dataset when one is available.
    pub async fn load(&mut self) {
        match fetch::fetch_feature_collection(&self.client, &self.backend_url).await {
            Ok(data) => self.install_dataset(data),
            Err(err) => {
                log::error!("dataset fetch failed: {err}");
                self.store.set_failed();
            }
        }

        match fetch::fetch_district_entries(&self.client, &self.backend_url).await {
            Ok(entries) => self.districts = entries,
            Err(err) => {
                log::warn!("district list fetch failed: {err}");
                self.districts = self
                    .store
                    .data()
                    .map(|data| {
                        queries::district_names(data)
                            .into_iter()
                            .map(|name| DistrictEntry { name })
                            .collect()
                    })
                    .unwrap_or_default();
            }
        }
    }

    /// Handles dataset-fetch completion: installs the data and re-derives
    /// the selection against it.
    pub fn install_dataset(&mut self, data: FeatureCollection) {
        self.store.set_data(data);
        self.selection.data_changed(self.store.data());
    }

    /// Handles a district dropdown change (`None` clears the filter).
    pub fn pick_district(&mut self, name: Option<&str>) {
        self.selection.select_district(name, self.store.data());
    }

    /// Handles a click on a map polygon.
    pub fn click_sector(&mut self, properties: SectorProperties) {
        self.selection.select_sector(Some(properties));
    }

    /// Handles a click on a ranking entry.
    pub fn pick_ranking_entry(&mut self, entry: &DistrictSummary) {
        self.selection.select_sector(Some(entry.properties.clone()));
    }

    /// Handles a filter-card click.
    pub fn choose_filter(&mut self, lens: FilterLens) {
        self.flow.open(lens);
    }

    /// Handles the user accepting the suggestion call-to-action.
    pub async fn request_suggestion(&mut self) {
        self.flow
            .accept(
                self.provider.as_ref(),
                self.selection.current_sector(),
                self.selection.selected_district(),
            )
            .await;
    }

    /// Handles the popup close button.
    pub fn close_popups(&mut self) {
        self.flow.close();
    }

    /// Styles for every feature under the current district filter, in
    /// dataset order. Empty while the dataset is unavailable.
    #[must_use]
    pub fn styles(&self) -> Vec<StyleDescriptor> {
        let district = self.selection.selected_district();

        self.store
            .data()
            .map(|data| {
                data.features
                    .iter()
                    .map(|f| self.palette.style_for(&f.properties, district))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Popup bodies for every feature, in dataset order (matching
    /// [`styles`](Self::styles)). Empty while the dataset is unavailable.
    #[must_use]
    pub fn popups(&self) -> Vec<String> {
        self.store
            .data()
            .map(|data| {
                data.features
                    .iter()
                    .map(|f| vuln_map_map::sector_popup(&f.properties))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The current most-affected ranking, at most `n` entries.
    #[must_use]
    pub fn ranking(&self, n: usize) -> Vec<DistrictSummary> {
        self.store
            .data()
            .map(|data| vuln_map_map::top_districts(data, n))
            .unwrap_or_default()
    }

    /// District dropdown entries.
    #[must_use]
    pub fn districts(&self) -> &[DistrictEntry] {
        &self.districts
    }

    /// The dataset store.
    #[must_use]
    pub const fn store(&self) -> &GeoDataStore {
        &self.store
    }

    /// The selection state.
    #[must_use]
    pub const fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// The suggestion flow.
    #[must_use]
    pub const fn flow(&self) -> &SuggestionFlow {
        &self.flow
    }
}
