//! Generic egui painting helpers for the element grid.
//!
//! Stateless functions that turn declarative `Cell`s into shapes; all
//! decisions about what to show live in the library's `render` module.

use eframe::egui;

use periodic_table::render::color::Rgba;
use periodic_table::render::layout::MAIN_ROWS;
use periodic_table::render::{Cell, CellKind, GridPos, Placement};

pub fn to_color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Screen rectangle of a grid cell. Rows below the main body are pushed down
/// half a pitch so the f-block reads as detached.
pub fn cell_rect(origin: egui::Pos2, pos: GridPos, size: f32, pitch: f32) -> egui::Rect {
    let mut y = pos.row.saturating_sub(1) as f32 * pitch;
    if pos.row > MAIN_ROWS {
        y += pitch * 0.5;
    }
    let x = pos.col.saturating_sub(1) as f32 * pitch;
    egui::Rect::from_min_size(origin + egui::vec2(x, y), egui::Vec2::splat(size))
}

/// Paint one element or placeholder cell.
pub fn paint_cell(
    painter: &egui::Painter,
    rect: egui::Rect,
    cell: &Cell,
    fill: Rgba,
    hovered: bool,
    selected: bool,
) {
    let rounding = egui::Rounding::same(4.0);
    let text_color = to_color32(fill.contrasting_text());

    let fill = match cell.kind {
        // Placeholders are drawn washed out so they do not read as elements.
        CellKind::SeriesPlaceholder(_) => Rgba { a: 140, ..fill },
        _ => fill,
    };
    painter.rect_filled(rect, rounding, to_color32(fill));

    let stroke = match &cell.kind {
        CellKind::Element {
            placement: Placement::Anomaly,
            ..
        } => Some(egui::Stroke::new(2.0, egui::Color32::from_rgb(220, 50, 50))),
        _ if selected => Some(egui::Stroke::new(2.5, egui::Color32::from_rgb(30, 90, 200))),
        _ if hovered => Some(egui::Stroke::new(1.5, egui::Color32::from_gray(60))),
        _ => None,
    };
    if let Some(stroke) = stroke {
        painter.rect_stroke(rect, rounding, stroke);
    }

    let size = rect.height();
    if let Some(caption) = cell.caption() {
        painter.text(
            rect.left_top() + egui::vec2(size * 0.08, size * 0.04),
            egui::Align2::LEFT_TOP,
            caption,
            egui::FontId::proportional(size * 0.22),
            text_color,
        );
        painter.text(
            rect.center() + egui::vec2(0.0, size * 0.1),
            egui::Align2::CENTER_CENTER,
            cell.label(),
            egui::FontId::proportional(size * 0.38),
            text_color,
        );
    } else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            cell.label(),
            egui::FontId::proportional(size * 0.24),
            text_color,
        );
    }
}
