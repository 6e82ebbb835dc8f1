//! Dar Price Studio - Desktop Application
//!
//! A desktop application that estimates Tunisian property prices from a
//! pre-trained regression model and a listings dataset.

use eframe::egui;

use dar_gui::app::{EstimatorApp, StartupErrorApp};
use dar_gui::services::load_resources;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Dataset and model load once, before the first frame. On failure the
    // window shows only the startup error; the form never renders.
    let startup = load_resources();
    if let Err(error) = &startup {
        tracing::error!("startup failed: {error:#}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Dar Price Studio")
            .with_inner_size([760.0, 680.0])
            .with_min_inner_size([600.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dar Price Studio",
        options,
        Box::new(move |_cc| {
            Ok(match startup {
                Ok(resources) => {
                    Box::new(EstimatorApp::new(resources)) as Box<dyn eframe::App>
                }
                Err(error) => Box::new(StartupErrorApp::new(format!("{error:#}"))),
            })
        }),
    )
}
