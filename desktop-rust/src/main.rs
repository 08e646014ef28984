mod app;
mod submit;

use app::{configure_fonts, FormApp};

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "BFHL Form Client",
        options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Box::new(FormApp::default())
        }),
    )
}
