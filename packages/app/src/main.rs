#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Startup entry point: loads the dataset and logs a session summary.

use vuln_map_app::{Config, Session};
use vuln_map_geography::LoadState;
use vuln_map_map::DEFAULT_RANKING_SIZE;

#[tokio::main]
async fn main() {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = Config::from_env();
    log::info!("backend: {}", config.backend_url);

    let mut session = Session::new(&config);
    session.load().await;

    match session.store().state() {
        LoadState::Ready => {
            log::info!("{} districts in dropdown", session.districts().len());

            for (index, entry) in session.ranking(DEFAULT_RANKING_SIZE).iter().enumerate() {
                log::info!(
                    "#{} {} ({})",
                    index + 1,
                    entry.name,
                    entry.formatted_score()
                );
            }
        }
        LoadState::Failed => log::error!("dataset unavailable"),
        LoadState::Loading => unreachable!("load() always resolves the store state"),
    }
}
