use catfinder::{
    core::{
        CatApi,
        Config,
    },
    gui::CatFinderApp,
};
use eframe::egui;

fn main() -> eframe::Result {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    let api = match CatApi::new(&config) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Cat Finder")
            .with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cat Finder",
        options,
        Box::new(|cc| Ok(Box::new(CatFinderApp::new(cc, api)))),
    )
}
