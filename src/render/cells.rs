//! Declarative cell list for one render pass.
//!
//! `render_cells` is a pure function of the table, its layout and the current
//! query. Every element, gap and series placeholder yields exactly one cell;
//! search only flips `visible` on element cells, so the grid keeps its shape.

use crate::element::{CategoryStyle, ElementTable, Series};
use crate::search::SearchQuery;

use super::layout::{GridPos, Placement, StructuralKind, TableLayout};

#[derive(Debug, Clone, PartialEq)]
pub enum CellKind {
    Element {
        atomic_number: u16,
        symbol: String,
        name: String,
        style: CategoryStyle,
        placement: Placement,
    },
    Gap,
    SeriesPlaceholder(Series),
}

/// What clicking a cell asks the detail panel to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAction {
    ShowElement(u16),
    ShowSeriesNote(Series),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub pos: GridPos,
    pub kind: CellKind,
    pub visible: bool,
}

impl Cell {
    pub fn is_element(&self) -> bool {
        matches!(self.kind, CellKind::Element { .. })
    }

    pub fn atomic_number(&self) -> Option<u16> {
        match self.kind {
            CellKind::Element { atomic_number, .. } => Some(atomic_number),
            _ => None,
        }
    }

    pub fn action(&self) -> Option<CellAction> {
        match self.kind {
            CellKind::Element { atomic_number, .. } => Some(CellAction::ShowElement(atomic_number)),
            CellKind::SeriesPlaceholder(series) => Some(CellAction::ShowSeriesNote(series)),
            CellKind::Gap => None,
        }
    }

    pub fn style(&self) -> Option<CategoryStyle> {
        match self.kind {
            CellKind::Element { style, .. } => Some(style),
            CellKind::SeriesPlaceholder(series) => Some(series.style()),
            CellKind::Gap => None,
        }
    }

    /// Small caption above the main label (the atomic number).
    pub fn caption(&self) -> Option<String> {
        self.atomic_number().map(|z| z.to_string())
    }

    pub fn label(&self) -> &str {
        match &self.kind {
            CellKind::Element { symbol, .. } => symbol.as_str(),
            CellKind::SeriesPlaceholder(series) => series.label(),
            CellKind::Gap => "",
        }
    }

    pub fn hover_text(&self) -> Option<String> {
        match &self.kind {
            CellKind::Element {
                name,
                placement: Placement::Anomaly,
                ..
            } => Some(format!("{} (position unknown)", name)),
            CellKind::Element { name, .. } => Some(name.clone()),
            CellKind::SeriesPlaceholder(series) => Some(format!("{}: see below", series.name())),
            CellKind::Gap => None,
        }
    }
}

/// Build the full cell list, sorted by grid position.
pub fn render_cells(table: &ElementTable, layout: &TableLayout, query: &SearchQuery) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(layout.elements.len() + layout.structural.len());

    cells.extend(layout.structural.iter().map(|s| Cell {
        pos: s.pos,
        kind: match s.kind {
            StructuralKind::Gap => CellKind::Gap,
            StructuralKind::SeriesPlaceholder(series) => CellKind::SeriesPlaceholder(series),
        },
        visible: true,
    }));

    for placed in &layout.elements {
        let Some(record) = table.get(placed.atomic_number) else {
            log::warn!("Layout refers to unknown element {}", placed.atomic_number);
            continue;
        };
        cells.push(Cell {
            pos: placed.pos,
            kind: CellKind::Element {
                atomic_number: record.atomic_number,
                symbol: record.symbol.clone(),
                name: record.name.clone(),
                style: record.style(),
                placement: placed.placement,
            },
            visible: query.matches(record),
        });
    }

    cells.sort_by_key(|c| c.pos);
    cells
}
