#![deny(missing_docs)]

//! Entry point for the dropout-risk window.
use dropout_risk::egui_app::controller::EguiController;
use dropout_risk::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use dropout_risk::{config, logging};
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 560.0])
            .with_min_inner_size(MIN_VIEWPORT_SIZE),
        ..Default::default()
    };

    let (cfg, load_error) = config::load_for_startup();
    let mut controller = EguiController::new(&cfg);
    if let Some(err) = &load_error {
        controller.report_config_fallback(err);
    }
    let app = EguiApp::from_controller(controller);
    eframe::run_native(
        "Dropout prediction",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app) as Box<dyn eframe::App>)),
    )?;
    Ok(())
}
