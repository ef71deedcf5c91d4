// Week Board Application
// Main entry point

use week_board::services::settings::SettingsService;
use week_board::ui_egui::BoardApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Week Board");

    let settings_service = SettingsService::new();
    if let Some(path) = settings_service.path() {
        log::info!("Reading settings from {}", path.display());
    }
    let settings = settings_service.load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Week Board")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Week Board",
        options,
        Box::new(move |cc| Ok(Box::new(BoardApp::new(cc, settings)))),
    )
}
