//! Neon - animated neon glow text demo

mod app;
mod settings;

use tracing_subscriber::EnvFilter;

use app::NeonApp;
use settings::Settings;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load();
    tracing::info!(
        path = %Settings::config_path().display(),
        text = %settings.config.text,
        animation = %settings.config.animation_type,
        "starting neon demo"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Neon")
            .with_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Neon",
        options,
        Box::new(|_cc| Ok(Box::new(NeonApp::new(settings)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
