//! Interactive viewer for the 2x2x2 pocket cube.

mod app;
mod cli;
mod gui;

const TITLE: &str = "Pocket Cube";
const APP_ID: &str = "PocketCube";

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install().expect("error initializing panic handler");

    let prefs = args.view_preferences()?;
    let engine = args.engine();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_app_id(APP_ID)
            .with_inner_size([660.0, 440.0])
            .with_min_inner_size([560.0, 400.0]),
        ..Default::default()
    };

    // With the glow backend, `eframe::Error` is not `Send + Sync`, so it
    // cannot convert into an `eyre::Report` through `?`.
    eframe::run_native(
        TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(gui::AppUi::new(cc, engine, prefs)))),
    )
    .map_err(|e| eyre::eyre!("{e}"))
}

impl eframe::App for gui::AppUi {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Build all the UI.
        self.build(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.app.stop_ticks();
    }
}
