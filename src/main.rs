mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::SongScopeApp;
use eframe::egui;

/// The dataset is read once at startup; there is no reload path.
const DATA_PATH: &str = "songs_normalize.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let songs = data::loader::load_csv(Path::new(DATA_PATH))
        .with_context(|| format!("loading dataset from {DATA_PATH}"))?;
    let data = data::model::DataContext::from_songs(songs);
    log::info!(
        "Loaded {} songs ({} genre rows, years {}–{})",
        data.len(),
        data.exploded.len(),
        data.year_min,
        data.year_max
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Song Analysis Dashboard",
        options,
        Box::new(move |cc| {
            // The charts are styled for the dark theme.
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(SongScopeApp::new(data)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard UI: {e}"))
}
