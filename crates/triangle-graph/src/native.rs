use eframe::egui;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::app::TriangleGraphApp;
use crate::scene::build_lab_scene;
use crate::settings::{LabSettings, SETTINGS_FILE};

/// Logs go to stderr so the matrix dump on stdout stays machine-readable.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by the native executable.
pub fn run() -> eframe::Result<()> {
    init_logging();

    let settings = LabSettings::load_or_default(Path::new(SETTINGS_FILE));
    let lab = match build_lab_scene(&settings) {
        Ok(lab) => lab,
        Err(e) => {
            error!(error = %e, "cannot build scene");
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    print!("{}", lab.console_dump());

    let (width, height) = settings.canvas_size();
    let title = format!("Lab 3 · Variant {}", lab.variant.value());
    info!(%title, width, height, "opening window");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([width as f32 + 40.0, height as f32 + 80.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(TriangleGraphApp::new(lab, &settings)))),
    )
}
