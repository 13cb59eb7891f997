mod app;
mod config;
mod panels;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = config::load_config();
    let startup_file = std::env::args().nth(1).map(std::path::PathBuf::from);
    let size = config.window_size;

    eframe::run_native(
        "Blueprint Editor",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(size),
            ..Default::default()
        },
        Box::new(move |cc| Ok(Box::new(app::BlueprintApp::new(cc, config, startup_file)))),
    )
}
