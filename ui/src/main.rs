#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use staffdesk_ui::state::State;

fn main() -> eframe::Result {
    // Log to stderr (run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Staffdesk",
        native_options,
        Box::new(|_cc| {
            let state = State::default();
            let app = staffdesk_ui::StaffdeskApp::new(state);
            Ok(Box::new(app))
        }),
    )
}
