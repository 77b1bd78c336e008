//! Label Viewer - desktop label generator for sheet metal stock.

mod app;
mod form;
mod preview;
mod theme;

use app::LabelApp;
use label_core::{FontConfig, FontSet, Palette};
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Optional palette file argument
    let palette = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match std::fs::read_to_string(&path)
            .map_err(label_core::LabelError::from)
            .and_then(|json| Palette::from_json(&json))
        {
            Ok(palette) => palette,
            Err(e) => {
                tracing::error!("Failed to load palette {}: {}", path.display(), e);
                Palette::standard()
            }
        },
        None => Palette::standard(),
    };

    let fonts = match FontSet::load(&FontConfig::default()) {
        Ok(fonts) => fonts,
        Err(e) => {
            tracing::error!("Failed to load a font: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([900.0, 500.0])
            .with_title("Sheet Metal Label Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "Sheet Metal Label Generator",
        options,
        Box::new(move |cc| Ok(Box::new(LabelApp::new(cc, palette, fonts)))),
    )
}
