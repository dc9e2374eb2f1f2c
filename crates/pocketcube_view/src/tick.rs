use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::ViewController;

/// Periodic driver for [`ViewController::tick()`].
///
/// The driver owns a background thread that locks the controller, runs one
/// tick, invokes the host's wake-up callback, and sleeps out the rest of the
/// period. There is no backpressure: a tick that overruns the period is
/// followed immediately by the next one.
///
/// The loop ends when [`TickDriver::stop()`] is called, when the driver is
/// dropped, or when a tick returns a fatal engine error (the controller
/// keeps showing its error state afterwards). Hosts that want deterministic
/// control instead can skip the driver and call
/// [`ViewController::tick()`] themselves.
#[derive(Debug)]
pub struct TickDriver {
    stop_flag: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TickDriver {
    /// Starts a driver ticking `controller` every `period`, calling
    /// `on_tick` after each frame update.
    pub fn start(
        controller: Arc<Mutex<ViewController>>,
        period: Duration,
        on_tick: impl Fn() + Send + 'static,
    ) -> Self {
        let stop_flag = Arc::new(AtomicBool::new(false));
        let thread = std::thread::spawn({
            let stop_flag = Arc::clone(&stop_flag);
            move || tick_loop(&controller, period, &stop_flag, on_tick)
        });
        Self {
            stop_flag,
            thread: Some(thread),
        }
    }

    /// Signals the tick thread to stop and waits for it to exit, which can
    /// take up to one period.
    pub fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("tick thread panicked");
            }
        }
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

fn tick_loop(
    controller: &Mutex<ViewController>,
    period: Duration,
    stop_flag: &AtomicBool,
    on_tick: impl Fn(),
) {
    log::debug!("tick driver started, period {period:?}");
    while !stop_flag.load(Ordering::Relaxed) {
        let tick_start = Instant::now();
        if let Err(error) = controller.lock().tick() {
            log::error!("tick driver stopping: {error}");
            // Wake the host once more so the error state becomes visible.
            on_tick();
            return;
        }
        on_tick();
        if let Some(remaining) = period.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
    log::debug!("tick driver stopped");
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use pocketcube_engine::FakeEngine;

    use super::*;
    use crate::ViewPreferences;

    fn shared_controller(engine: FakeEngine) -> Arc<Mutex<ViewController>> {
        Arc::new(Mutex::new(ViewController::new(
            Box::new(engine),
            ViewPreferences::default(),
        )))
    }

    fn wait_until(deadline_ms: u64, mut condition: impl FnMut() -> bool) {
        let deadline = Instant::now() + Duration::from_millis(deadline_ms);
        while !condition() {
            assert!(Instant::now() < deadline, "timed out");
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_ticks_until_stopped() {
        let controller = shared_controller(FakeEngine::new());
        let ticks = Arc::new(AtomicUsize::new(0));
        let mut driver = TickDriver::start(Arc::clone(&controller), Duration::from_millis(1), {
            let ticks = Arc::clone(&ticks);
            move || {
                ticks.fetch_add(1, Ordering::Relaxed);
            }
        });

        wait_until(5000, || ticks.load(Ordering::Relaxed) >= 3);
        driver.stop();

        // After stop() returns the thread is gone, so the count is final.
        let final_count = ticks.load(Ordering::Relaxed);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(final_count, ticks.load(Ordering::Relaxed));
        assert_eq!(None, controller.lock().error());
    }

    #[test]
    fn test_fatal_tick_halts_driver() {
        let mut engine = FakeEngine::new();
        engine.set_frame_buffer_len(16);
        let controller = shared_controller(engine);
        let ticks = Arc::new(AtomicUsize::new(0));
        let _driver = TickDriver::start(Arc::clone(&controller), Duration::from_millis(1), {
            let ticks = Arc::clone(&ticks);
            move || {
                ticks.fetch_add(1, Ordering::Relaxed);
            }
        });

        // The first tick fails, wakes the host once, and ends the loop.
        wait_until(5000, || controller.lock().error().is_some());
        wait_until(5000, || ticks.load(Ordering::Relaxed) == 1);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(1, ticks.load(Ordering::Relaxed));
    }

    #[test]
    fn test_drop_stops_thread() {
        let controller = shared_controller(FakeEngine::new());
        let ticks = Arc::new(AtomicUsize::new(0));
        {
            let _driver =
                TickDriver::start(Arc::clone(&controller), Duration::from_millis(1), {
                    let ticks = Arc::clone(&ticks);
                    move || {
                        ticks.fetch_add(1, Ordering::Relaxed);
                    }
                });
            wait_until(5000, || ticks.load(Ordering::Relaxed) >= 1);
        }
        let final_count = ticks.load(Ordering::Relaxed);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(final_count, ticks.load(Ordering::Relaxed));
    }
}
