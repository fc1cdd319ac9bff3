mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::{Result, anyhow};

use app::IrisExplorerApp;
use config::ExplorerConfig;
use data::loader;
use data::model::FeatureColumn;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = ExplorerConfig::default();

    let dataset = loader::load_bundled().inspect_err(|e| {
        log::error!("Cannot start without the Iris dataset: {e:#}");
    })?;
    log::info!(
        "Loaded {} records with columns {:?} + Species",
        dataset.len(),
        FeatureColumn::ALL.map(FeatureColumn::label)
    );

    let state = AppState::new(Arc::new(dataset), config.clone());

    eframe::run_native(
        &config.window_title,
        config.native_options(),
        Box::new(move |_cc| Ok(Box::new(IrisExplorerApp::new(state)))),
    )
    .map_err(|e| anyhow!("eframe: {e}"))
}
