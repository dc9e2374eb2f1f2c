use std::sync::Arc;

use parking_lot::Mutex;
use pocketcube_core::CubeEngine;
use pocketcube_view::{TickDriver, ViewController, ViewPreferences};

/// Application state: the shared view controller plus the redraw thread
/// driving it.
pub struct App {
    controller: Arc<Mutex<ViewController>>,
    tick_driver: TickDriver,
}

impl App {
    /// Builds the controller around `engine` and starts the redraw thread,
    /// waking `egui_ctx` after every tick.
    pub fn new(
        egui_ctx: &egui::Context,
        engine: Box<dyn CubeEngine>,
        prefs: ViewPreferences,
    ) -> Self {
        let period = prefs.tick_period();
        let controller = Arc::new(Mutex::new(ViewController::new(engine, prefs)));
        let ctx = egui_ctx.clone();
        let tick_driver = TickDriver::start(Arc::clone(&controller), period, move || {
            ctx.request_repaint();
        });
        App {
            controller,
            tick_driver,
        }
    }

    /// Returns the shared controller.
    pub fn controller(&self) -> &Arc<Mutex<ViewController>> {
        &self.controller
    }

    /// Stops the redraw thread.
    pub fn stop_ticks(&mut self) {
        self.tick_driver.stop();
    }
}
