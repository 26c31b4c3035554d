//! Dataset store and loading state.

use vuln_map_geography_models::FeatureCollection;

/// Where the initial dataset fetch currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch in flight (or not yet started).
    Loading,
    /// Dataset available.
    Ready,
    /// Fetch failed. Terminal: there is no retry, the view stays in its
    /// "data unavailable" state for the rest of the session.
    Failed,
}

/// Owns the fetched feature collection for the lifetime of the session.
///
/// Populated once by the startup fetch and replaced wholesale if a
/// refetch ever occurs; individual features are never mutated.
#[derive(Debug, Clone)]
pub struct GeoDataStore {
    state: LoadState,
    data: Option<FeatureCollection>,
}

impl GeoDataStore {
    /// Creates an empty store in the [`LoadState::Loading`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoadState::Loading,
            data: None,
        }
    }

    /// Installs a fetched dataset, replacing any previous one.
    pub fn set_data(&mut self, data: FeatureCollection) {
        log::info!("dataset loaded: {} sectors", data.len());
        self.data = Some(data);
        self.state = LoadState::Ready;
    }

    /// Marks the initial fetch as permanently failed.
    pub fn set_failed(&mut self) {
        self.state = LoadState::Failed;
        self.data = None;
    }

    /// Current loading state.
    #[must_use]
    pub const fn state(&self) -> LoadState {
        self.state
    }

    /// The dataset, if loaded.
    #[must_use]
    pub const fn data(&self) -> Option<&FeatureCollection> {
        self.data.as_ref()
    }

    /// Whether the initial fetch is still pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }
}

impl Default for GeoDataStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading_and_empty() {
        let store = GeoDataStore::new();

        assert!(store.is_loading());
        assert!(store.data().is_none());
    }

    #[test]
    fn set_data_transitions_to_ready() {
        let mut store = GeoDataStore::new();
        store.set_data(FeatureCollection::default());

        assert_eq!(store.state(), LoadState::Ready);
        assert!(store.data().is_some());
        assert!(!store.is_loading());
    }

    #[test]
    fn set_failed_is_terminal_and_clears_data() {
        let mut store = GeoDataStore::new();
        store.set_data(FeatureCollection::default());
        store.set_failed();

        assert_eq!(store.state(), LoadState::Failed);
        assert!(store.data().is_none());
    }
}
