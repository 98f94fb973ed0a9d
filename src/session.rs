//! The state behind one window: load status, element table, query and the
//! current detail content. The UI owns exactly one `Session` and hands it
//! user input; layout and cells are recomputed here, never in the painter.

use crate::detail::DetailView;
use crate::element::ElementTable;
use crate::engine::pipeline::LoadError;
use crate::render::{render_cells, Cell, CellAction, TableLayout};
use crate::search::SearchQuery;

#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(ElementTable),
    Failed(String),
}

#[derive(Debug)]
pub struct Session {
    load: LoadState,
    layout: TableLayout,
    query: SearchQuery,
    cells: Vec<Cell>,
    detail: DetailView,
    selected: Option<u16>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            layout: TableLayout::default(),
            query: SearchQuery::default(),
            cells: Vec::new(),
            detail: DetailView::Loading,
            selected: None,
        }
    }

    /// Take the one-and-only load result.
    pub fn apply_load(&mut self, result: Result<ElementTable, LoadError>) {
        match result {
            Ok(table) => {
                self.load = LoadState::Ready(table);
                self.detail = DetailView::Prompt;
            }
            Err(e) => {
                let message = e.to_string();
                self.load = LoadState::Failed(message.clone());
                self.detail = DetailView::Error(message);
            }
        }
        self.selected = None;
        self.layout = TableLayout::compute(self.table().unwrap_or(&ElementTable::default()));
        self.refresh_cells();
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn table(&self) -> Option<&ElementTable> {
        match &self.load {
            LoadState::Ready(table) => Some(table),
            _ => None,
        }
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn set_query(&mut self, raw: &str) {
        let query = SearchQuery::new(raw);
        if query == self.query {
            return;
        }
        log::debug!("Search query: {:?}", query.as_str());
        self.query = query;
        self.refresh_cells();
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Matches for a non-empty query, `None` otherwise.
    pub fn match_count(&self) -> Option<usize> {
        if self.query.is_empty() {
            return None;
        }
        Some(self.table().map_or(0, |t| self.query.count(t)))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn activate(&mut self, action: CellAction) {
        log::debug!("Cell activated: {:?}", action);
        match action {
            CellAction::ShowElement(z) => {
                let Some(record) = self.table().and_then(|t| t.get(z)) else {
                    log::warn!("No element with atomic number {}", z);
                    return;
                };
                self.detail = DetailView::for_record(record);
                self.selected = Some(z);
            }
            CellAction::ShowSeriesNote(series) => {
                self.detail = DetailView::for_series(series);
                self.selected = None;
            }
        }
    }

    /// Show the element whose symbol is exactly `symbol` (case-insensitive).
    /// Returns `false` when no element carries it.
    pub fn select_symbol(&mut self, symbol: &str) -> bool {
        let Some(z) = self
            .table()
            .and_then(|t| t.by_symbol(symbol.trim()))
            .map(|r| r.atomic_number)
        else {
            return false;
        };
        self.activate(CellAction::ShowElement(z));
        true
    }

    /// Records parked in the anomaly rows.
    pub fn anomaly_count(&self) -> usize {
        self.layout.anomalies().count()
    }

    pub fn detail(&self) -> &DetailView {
        &self.detail
    }

    pub fn selected(&self) -> Option<u16> {
        self.selected
    }

    fn refresh_cells(&mut self) {
        let empty = ElementTable::default();
        let table = self.table().unwrap_or(&empty);
        self.cells = render_cells(table, &self.layout, &self.query);
    }
}
