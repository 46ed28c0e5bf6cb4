//! DeskCalc - a four-function calculator window

mod app;

use app::DeskCalcApp;
use deskcore::{DeskTheme, Preferences};
use eframe::NativeOptions;

const APP_NAME: &str = "deskcalc";

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let prefs_path = Preferences::default_path(APP_NAME);
    let prefs = Preferences::load_or_default(&prefs_path);
    log::info!("window {}x{}", prefs.window_width, prefs.window_height);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([prefs.window_width, prefs.window_height])
            .with_title("calculator"),
        ..Default::default()
    };

    let theme = DeskTheme::from_preferences(&prefs);
    eframe::run_native(
        "calculator",
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Box::new(DeskCalcApp::new(cc, theme))
        }),
    )
}
