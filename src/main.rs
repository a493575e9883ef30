//! RustFit - workout logging dashboard
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RustFit v{}", env!("CARGO_PKG_VERSION"));

    let config = rustfit::storage::config::load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        rustfit::AppConfig::with_defaults()
    });

    let slot = rustfit::storage::open_slot(&config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title("RustFit"),
        ..Default::default()
    };

    eframe::run_native(
        "RustFit",
        options,
        Box::new(move |cc| Ok(Box::new(app::RustFitApp::new(cc, runtime, config, slot)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))
}
