use eframe::egui;

use periodic_table::config::Config;

mod app;
mod ui;

use app::PeriodicApp;

fn main() {
    env_logger::init();

    let config = Config::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Periodic Table"),
        ..Default::default()
    };

    eframe::run_native(
        "Periodic Table",
        options,
        Box::new(move |cc| Ok(Box::new(PeriodicApp::new(cc, config)))),
    )
    .expect("Failed to start Periodic Table");
}
