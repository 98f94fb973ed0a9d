pub mod cells;
pub mod color;
pub mod layout;

pub use cells::{render_cells, Cell, CellAction, CellKind};
pub use layout::{GridPos, Placement, TableLayout};
