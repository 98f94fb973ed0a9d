//! Content-area rendering for `PeriodicApp`.
//!
//! - `draw_table`         — the element grid (central panel)
//! - `draw_detail_panel`  — attributes of the clicked element, notes, errors
//! - `draw_legend`        — category colour key under the details

use eframe::egui;

use periodic_table::detail::DetailView;
use periodic_table::element::CategoryStyle;
use periodic_table::render::layout::{COLUMNS, MAIN_ROWS};

use crate::ui::{cell_rect, paint_cell, to_color32};
use super::PeriodicApp;

/// Space between neighbouring cells, in points.
const CELL_GAP: f32 = 4.0;

impl PeriodicApp {
    // ── Grid ─────────────────────────────────────────────────────────────────

    pub fn draw_table(&mut self, ui: &mut egui::Ui) {
        if self.session.is_loading() {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
            return;
        }

        let cell_size = self.config.cell_size;
        let pitch = cell_size + CELL_GAP;
        let rows = self.session.layout().rows();
        let detached = if rows > MAIN_ROWS { pitch * 0.5 } else { 0.0 };
        let selected = self.session.selected();
        let mut clicked = None;

        egui::ScrollArea::both()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                let size = egui::vec2(
                    COLUMNS as f32 * pitch,
                    rows as f32 * pitch + detached,
                );
                let (area, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                let painter = ui.painter_at(area);

                for cell in self.session.cells() {
                    // Hidden cells keep their slot; gaps draw nothing.
                    if !cell.visible {
                        continue;
                    }
                    let Some(action) = cell.action() else {
                        continue;
                    };

                    let rect = cell_rect(area.min, cell.pos, cell_size, pitch);
                    let id = ui.id().with(("cell", cell.pos.row, cell.pos.col));
                    let mut response = ui.interact(rect, id, egui::Sense::click());
                    if let Some(text) = cell.hover_text() {
                        response = response.on_hover_text(text);
                    }

                    let fill = self
                        .config
                        .category_color(cell.style().unwrap_or(CategoryStyle::Unknown));
                    let is_selected = selected.is_some() && cell.atomic_number() == selected;
                    paint_cell(&painter, rect, cell, fill, response.hovered(), is_selected);

                    if response.clicked() {
                        clicked = Some(action);
                    }
                }
            });

        if let Some(action) = clicked {
            self.session.activate(action);
        }
    }

    // ── Detail panel ─────────────────────────────────────────────────────────

    pub fn draw_detail_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.heading("Details");
        ui.separator();

        let detail = self.session.detail();
        match detail {
            DetailView::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(detail.text());
                });
            }
            DetailView::Element { title, lines } => {
                ui.label(egui::RichText::new(title).size(20.0).strong());
                ui.add_space(6.0);
                egui::Grid::new("detail_grid")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for line in lines {
                            ui.strong(line.label);
                            ui.label(line.value.as_str());
                            ui.end_row();
                        }
                    });
            }
            DetailView::Error(msg) => {
                ui.colored_label(egui::Color32::from_rgb(220, 50, 50), msg.as_str());
            }
            DetailView::Prompt | DetailView::Note(_) => {
                ui.label(detail.text());
            }
        }

        if detail.is_error() || matches!(detail, DetailView::Element { .. }) {
            ui.add_space(6.0);
            if ui.button("Copy").on_hover_text("Copy as text").clicked() {
                let text = detail.text();
                ui.output_mut(|o| o.copied_text = text);
            }
        }

        ui.add_space(16.0);
        ui.separator();
        self.draw_legend(ui);
    }

    pub fn draw_legend(&self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Categories").strong());
        for style in CategoryStyle::ALL {
            let color = self.config.category_color(style);
            ui.horizontal(|ui| {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, egui::Rounding::same(3.0), to_color32(color));
                response.on_hover_text(color.to_hex());
                ui.label(style.display_name());
            });
        }
    }
}
