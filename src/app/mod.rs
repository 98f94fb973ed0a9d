//! `PeriodicApp` — the top-level egui application state.
//!
//! This module declares the `PeriodicApp` struct and its `eframe::App` impl.
//! The drawing and loading methods are split across the sibling sub-modules:
//!
//! - `loading` — one-shot dataset fetch on a worker thread
//! - `toolbar` — title, search field and controls
//! - `content` — the element grid and the detail side panel

pub mod content;
pub mod loading;
pub mod toolbar;

use std::sync::mpsc;
use std::time::Instant;

use eframe::egui;

use periodic_table::config::Config;
use periodic_table::element::ElementTable;
use periodic_table::engine::pipeline::LoadError;
use periodic_table::session::Session;

// ─── Application state ───────────────────────────────────────────────────────

pub struct PeriodicApp {
    pub config: Config,
    pub session: Session,
    /// Raw text of the search field; the session keeps the normalised query.
    pub search_input: String,
    pub dark_mode: bool,
    pub load_rx: Option<mpsc::Receiver<Result<ElementTable, LoadError>>>,
    pub load_started: Option<Instant>,
}

impl PeriodicApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let mut app = Self {
            dark_mode: config.dark_mode,
            config,
            session: Session::new(),
            search_input: String::new(),
            load_rx: None,
            load_started: None,
        };
        app.start_load(&cc.egui_ctx);
        app
    }
}

impl eframe::App for PeriodicApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load();

        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::SidePanel::right("detail")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.draw_detail_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_table(ui);
        });
    }
}
