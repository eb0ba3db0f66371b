mod app;
use flashcards_app::*;

use api::ApiClient;
use app::FlashcardsApp;
use config::ClientConfig;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> eframe::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ClientConfig::load();
    let client = ApiClient::new(config.server_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([500.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcards",
        options,
        Box::new(|_cc| Ok(Box::new(FlashcardsApp::new(client)))),
    )
}
