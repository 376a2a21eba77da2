#![warn(clippy::all, rust_2018_idioms)]

use touch_sketch::SketchApp;

/// Portrait phone-sized window
const WINDOW_SIZE: [f32; 2] = [360.0, 640.0];

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Touch Sketch")
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Touch Sketch",
        native_options,
        Box::new(|cc| Ok(Box::new(SketchApp::new(cc)))),
    )
}
