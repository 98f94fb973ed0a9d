//! Toolbar rendering for `PeriodicApp`.
//!
//! Draws the title, the live search field with its match counter, and the
//! dark-mode toggle.

use eframe::egui;
use periodic_table::session::LoadState;

use super::PeriodicApp;

impl PeriodicApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);
            ui.strong("Periodic Table");
            ui.separator();

            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_input)
                    .hint_text("Search name, symbol or number...")
                    .desired_width(260.0),
            );
            if response.changed() {
                self.session.set_query(&self.search_input);
            }
            // Enter on an exact symbol opens that element's details.
            if response.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter))
                && !self.session.select_symbol(&self.search_input)
            {
                log::debug!("No element with symbol {:?}", self.search_input.trim());
            }

            if !self.search_input.is_empty()
                && ui
                    .small_button("\u{2715}")
                    .on_hover_text("Clear search")
                    .clicked()
            {
                self.search_input.clear();
                self.session.set_query("");
            }

            if let Some(count) = self.session.match_count() {
                ui.colored_label(
                    if count > 0 {
                        egui::Color32::from_rgb(0, 180, 0)
                    } else {
                        egui::Color32::from_rgb(255, 80, 80)
                    },
                    format!("{} match{}", count, if count == 1 { "" } else { "es" }),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(4.0);
                let dark_label = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
                if ui.button(dark_label).on_hover_text("Toggle dark mode").clicked() {
                    self.dark_mode = !self.dark_mode;
                    self.config.dark_mode = self.dark_mode;
                    match self.config.save() {
                        Ok(path) => log::info!("Config saved to {:?}", path),
                        Err(e) => log::warn!("Failed to save config: {}", e),
                    }
                }

                match self.session.load_state() {
                    LoadState::Loading => {
                        ui.spinner();
                    }
                    LoadState::Ready(table) => {
                        let unplaced = self.session.anomaly_count();
                        if unplaced > 0 {
                            ui.colored_label(
                                egui::Color32::from_rgb(220, 50, 50),
                                format!("{} unplaced", unplaced),
                            )
                            .on_hover_text("Records without a usable group/period");
                        }
                        ui.weak(format!("{} elements", table.len()));
                    }
                    LoadState::Failed(_) => {
                        ui.colored_label(egui::Color32::from_rgb(220, 50, 50), "offline");
                    }
                }
            });
        });
    }
}
