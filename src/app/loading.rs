//! Dataset loading for `PeriodicApp`.
//!
//! The fetch runs once, on a worker thread started from `new`; `check_load`
//! polls the channel every frame and hands the result to the session.

use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use eframe::egui;

use periodic_table::engine::pipeline::{spawn_load, LoadError};
use periodic_table::net::fetch::source_for_endpoint;

use super::PeriodicApp;

impl PeriodicApp {
    /// Start the one-shot dataset fetch.
    pub fn start_load(&mut self, ctx: &egui::Context) {
        if self.load_rx.is_some() {
            return;
        }

        let source =
            match source_for_endpoint(&self.config.endpoint, self.config.request_timeout()) {
                Ok(source) => source,
                Err(e) => {
                    log::error!("{}", e);
                    self.session.apply_load(Err(LoadError::Fetch(e)));
                    return;
                }
            };

        self.load_started = Some(Instant::now());
        let ctx = ctx.clone();
        self.load_rx = Some(spawn_load(source, move || ctx.request_repaint()));
    }

    /// Poll the load channel and update the session when a result arrives.
    pub fn check_load(&mut self) {
        if let Some(rx) = &self.load_rx {
            let result = match rx.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => Err(LoadError::Interrupted),
            };

            if let Some(started) = self.load_started.take() {
                log::debug!(
                    "Load finished after {:.1} ms",
                    started.elapsed().as_secs_f64() * 1000.0
                );
            }
            self.session.apply_load(result);
            self.load_rx = None;
        }
    }
}
