//! Grid placement for the periodic table.
//!
//! Rows 1–7 are the periods of the main body, rows 8 and 9 the detached
//! lanthanide and actinide rows, row 10 onwards holds records whose data does
//! not yield a usable position. Columns are groups 1–18. All coordinates are
//! 1-based.

use std::collections::HashSet;

use crate::element::{ElementRecord, ElementTable, Series};

pub const COLUMNS: u8 = 18;
pub const MAIN_ROWS: u16 = 7;
pub const LANTHANIDE_ROW: u16 = 8;
pub const ACTINIDE_ROW: u16 = 9;
pub const ANOMALY_ROW: u16 = 10;

/// Column of the first f-block slot; series member `z` lands at
/// `(z - series.first()) + FBLOCK_FIRST_COLUMN`.
pub const FBLOCK_FIRST_COLUMN: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    /// `u16` so the anomaly rows can hold one record per atomic number.
    pub row: u16,
    pub col: u8,
}

impl GridPos {
    pub const fn new(row: u16, col: u8) -> Self {
        Self { row, col }
    }
}

/// Why an element sits where it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `(Period, Group)` in the main body.
    Main,
    /// A slot in one of the detached f-block rows.
    FBlock(Series),
    /// La / Ac without group or period, pinned to the series cell in the body.
    SeriesHead(Series),
    /// No usable position; parked in the anomaly row.
    Anomaly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedElement {
    pub atomic_number: u16,
    pub pos: GridPos,
    pub placement: Placement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralKind {
    /// Empty cell that keeps the table's shape.
    Gap,
    /// "57-71" / "89-103" stand-in pointing at the detached rows.
    SeriesPlaceholder(Series),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralCell {
    pub pos: GridPos,
    pub kind: StructuralKind,
}

/// Detached row holding a series.
pub const fn series_row(series: Series) -> u16 {
    match series {
        Series::Lanthanide => LANTHANIDE_ROW,
        Series::Actinide => ACTINIDE_ROW,
    }
}

/// Main-body cell that stands for the series (group 3 of period 6 / 7).
pub const fn series_head(series: Series) -> GridPos {
    match series {
        Series::Lanthanide => GridPos::new(6, 3),
        Series::Actinide => GridPos::new(7, 3),
    }
}

/// F-block cell of a series member.
pub fn series_slot(series: Series, atomic_number: u16) -> GridPos {
    let offset = atomic_number.saturating_sub(series.first()) as u8;
    GridPos::new(series_row(series), offset + FBLOCK_FIRST_COLUMN)
}

/// Cell of the `idx`-th unplaced record; the anomaly area wraps every
/// `COLUMNS` cells.
pub fn anomaly_slot(idx: u16) -> GridPos {
    let columns = u16::from(COLUMNS);
    GridPos::new(ANOMALY_ROW + idx / columns, (idx % columns) as u8 + 1)
}

/// Gap cells: period 1 between H and He, periods 2 and 3 before the
/// p-block, and the columns in front of the f-block rows.
pub fn gap_positions() -> impl Iterator<Item = GridPos> {
    let period_one = (2..=17).map(|col| GridPos::new(1, col));
    let periods_two_three =
        [2u16, 3].into_iter().flat_map(|row| (3..=12).map(move |col| GridPos::new(row, col)));
    let fblock_lead = [LANTHANIDE_ROW, ACTINIDE_ROW]
        .into_iter()
        .flat_map(|row| (1..FBLOCK_FIRST_COLUMN).map(move |col| GridPos::new(row, col)));
    period_one.chain(periods_two_three).chain(fblock_lead)
}

fn is_reserved(pos: GridPos) -> bool {
    Series::ALL.iter().any(|&s| series_head(s) == pos) || gap_positions().any(|g| g == pos)
}

/// Where a record wants to go, before collisions are considered.
///
/// `None` means the record carries no usable position.
pub fn place(record: &ElementRecord) -> Option<(GridPos, Placement)> {
    let z = record.atomic_number;

    if let Some(series) = record.series() {
        if z == series.first() && record.group.is_none() && record.period.is_none() {
            return Some((series_head(series), Placement::SeriesHead(series)));
        }
        return Some((series_slot(series, z), Placement::FBlock(series)));
    }

    match (record.group, record.period) {
        (Some(group), Some(period))
            if (1..=COLUMNS).contains(&group) && (1..=MAIN_ROWS).contains(&u16::from(period)) =>
        {
            let pos = GridPos::new(u16::from(period), group);
            if is_reserved(pos) {
                None
            } else {
                Some((pos, Placement::Main))
            }
        }
        _ => None,
    }
}

/// Positions for one element table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableLayout {
    /// Sorted by atomic number.
    pub elements: Vec<PlacedElement>,
    pub structural: Vec<StructuralCell>,
}

impl TableLayout {
    pub fn compute(table: &ElementTable) -> Self {
        let mut occupied: HashSet<GridPos> = HashSet::new();
        let mut elements = Vec::with_capacity(table.len());
        let mut unplaced: Vec<u16> = Vec::new();

        // Records arrive sorted, so on a clash the lower atomic number keeps
        // the cell.
        for record in table.records() {
            match place(record) {
                Some((pos, placement)) if occupied.insert(pos) => {
                    elements.push(PlacedElement {
                        atomic_number: record.atomic_number,
                        pos,
                        placement,
                    });
                }
                Some((pos, _)) => {
                    log::warn!(
                        "{} ({}) collides at row {} col {}; moved to anomaly row",
                        record.symbol,
                        record.atomic_number,
                        pos.row,
                        pos.col
                    );
                    unplaced.push(record.atomic_number);
                }
                None => {
                    if let Some(series) = Series::from_style(record.style()) {
                        log::warn!(
                            "{} ({}) is categorised as {} but its atomic number is outside {}",
                            record.symbol,
                            record.atomic_number,
                            series.name(),
                            series.label()
                        );
                    } else {
                        log::warn!(
                            "{} ({}) has no usable group/period; moved to anomaly row",
                            record.symbol,
                            record.atomic_number
                        );
                    }
                    unplaced.push(record.atomic_number);
                }
            }
        }

        // Atomic numbers are unique `u16`s, so the index always fits.
        for (idx, atomic_number) in (0..=u16::MAX).zip(unplaced) {
            elements.push(PlacedElement {
                atomic_number,
                pos: anomaly_slot(idx),
                placement: Placement::Anomaly,
            });
        }
        elements.sort_by_key(|e| e.atomic_number);

        let mut structural: Vec<StructuralCell> = gap_positions()
            .map(|pos| StructuralCell {
                pos,
                kind: StructuralKind::Gap,
            })
            .collect();
        for series in Series::ALL {
            let head = series_head(series);
            if !occupied.contains(&head) {
                structural.push(StructuralCell {
                    pos: head,
                    kind: StructuralKind::SeriesPlaceholder(series),
                });
            }
        }

        Self {
            elements,
            structural,
        }
    }

    pub fn position_of(&self, atomic_number: u16) -> Option<GridPos> {
        self.elements
            .binary_search_by_key(&atomic_number, |e| e.atomic_number)
            .ok()
            .map(|idx| self.elements[idx].pos)
    }

    /// Number of grid rows needed to show every cell.
    pub fn rows(&self) -> u16 {
        self.elements
            .iter()
            .map(|e| e.pos.row)
            .chain(self.structural.iter().map(|s| s.pos.row))
            .max()
            .unwrap_or(0)
    }

    pub fn anomalies(&self) -> impl Iterator<Item = &PlacedElement> {
        self.elements
            .iter()
            .filter(|e| e.placement == Placement::Anomaly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata::{full_records, full_table};

    fn positioned(z: u16, group: u8, period: u8) -> ElementRecord {
        let mut r = ElementRecord::new(z, format!("E{}", z), format!("Element {}", z));
        r.group = Some(group);
        r.period = Some(period);
        r
    }

    #[test]
    fn main_body_uses_period_and_group() {
        let table = full_table();
        let layout = TableLayout::compute(&table);
        for record in table.records() {
            if record.series().is_some() {
                continue;
            }
            if let (Some(g), Some(p)) = (record.group, record.period) {
                assert_eq!(
                    layout.position_of(record.atomic_number),
                    Some(GridPos::new(u16::from(p), g)),
                    "{}",
                    record.symbol
                );
            }
        }
        assert_eq!(layout.position_of(1), Some(GridPos::new(1, 1)));
        assert_eq!(layout.position_of(2), Some(GridPos::new(1, 18)));
        assert_eq!(layout.position_of(26), Some(GridPos::new(4, 8)));
    }

    fn assert_contiguous_row(layout: &TableLayout, series: Series) {
        let members: Vec<&PlacedElement> = layout
            .elements
            .iter()
            .filter(|e| e.placement == Placement::FBlock(series))
            .collect();
        assert!(!members.is_empty());
        for pair in members.windows(2) {
            assert!(pair[0].atomic_number < pair[1].atomic_number);
            assert_eq!(pair[0].pos.row, series_row(series));
            assert_eq!(pair[1].pos.col, pair[0].pos.col + 1);
            assert_eq!(pair[1].atomic_number, pair[0].atomic_number + 1);
        }
        for e in &members {
            assert_eq!(e.pos, series_slot(series, e.atomic_number));
        }
    }

    #[test]
    fn lanthanides_fill_row_eight() {
        let layout = TableLayout::compute(&full_table());
        assert_contiguous_row(&layout, Series::Lanthanide);
        // La has no group/period in the fixture and is pinned into the body
        assert_eq!(layout.position_of(57), Some(GridPos::new(6, 3)));
        assert_eq!(layout.position_of(58), Some(GridPos::new(8, 4)));
        assert_eq!(layout.position_of(71), Some(GridPos::new(8, 17)));
    }

    #[test]
    fn actinides_fill_row_nine() {
        let layout = TableLayout::compute(&full_table());
        assert_contiguous_row(&layout, Series::Actinide);
        assert_eq!(layout.position_of(89), Some(GridPos::new(7, 3)));
        assert_eq!(layout.position_of(90), Some(GridPos::new(9, 4)));
        assert_eq!(layout.position_of(103), Some(GridPos::new(9, 17)));
    }

    #[test]
    fn series_heads_with_position_join_fblock_row() {
        let mut records = full_records();
        records[56].group = Some(3);
        records[56].period = Some(6);
        records[88].group = Some(3);
        records[88].period = Some(7);
        let layout = TableLayout::compute(&ElementTable::from_records(records));

        assert_eq!(layout.position_of(57), Some(GridPos::new(8, 3)));
        assert_eq!(layout.position_of(89), Some(GridPos::new(9, 3)));
        // (6,3) / (7,3) are now free and show the series placeholders
        let placeholders: Vec<GridPos> = layout
            .structural
            .iter()
            .filter(|s| matches!(s.kind, StructuralKind::SeriesPlaceholder(_)))
            .map(|s| s.pos)
            .collect();
        assert_eq!(placeholders, vec![GridPos::new(6, 3), GridPos::new(7, 3)]);
        assert_contiguous_row(&layout, Series::Lanthanide);
        assert_contiguous_row(&layout, Series::Actinide);
    }

    #[test]
    fn pinned_heads_suppress_placeholders() {
        let layout = TableLayout::compute(&full_table());
        assert!(!layout
            .structural
            .iter()
            .any(|s| matches!(s.kind, StructuralKind::SeriesPlaceholder(_))));
    }

    #[test]
    fn every_element_has_a_unique_cell() {
        let table = full_table();
        let layout = TableLayout::compute(&table);
        assert_eq!(layout.elements.len(), table.len());
        assert_eq!(layout.anomalies().count(), 0);

        let mut seen = HashSet::new();
        for e in &layout.elements {
            assert!(seen.insert(e.pos), "two elements at {:?}", e.pos);
        }
        for s in &layout.structural {
            assert!(seen.insert(s.pos), "structural cell overlaps at {:?}", s.pos);
        }
    }

    #[test]
    fn layout_is_idempotent() {
        let table = full_table();
        assert_eq!(TableLayout::compute(&table), TableLayout::compute(&table));
    }

    #[test]
    fn gap_cells_shape_the_table() {
        let gaps: Vec<GridPos> = gap_positions().collect();
        assert_eq!(gaps.len(), 16 + 10 + 10 + 2 + 2);
        assert!(gaps.contains(&GridPos::new(1, 2)));
        assert!(gaps.contains(&GridPos::new(1, 17)));
        assert!(!gaps.contains(&GridPos::new(1, 18)));
        assert!(gaps.contains(&GridPos::new(2, 3)));
        assert!(gaps.contains(&GridPos::new(3, 12)));
        assert!(!gaps.contains(&GridPos::new(3, 13)));
        assert!(!gaps.contains(&GridPos::new(4, 3)));
        assert!(gaps.contains(&GridPos::new(8, 2)));
        assert!(!gaps.contains(&GridPos::new(8, 3)));
    }

    #[test]
    fn unpositioned_records_go_to_anomaly_row() {
        let table = ElementTable::from_records(vec![
            positioned(1, 1, 1),
            ElementRecord::new(200, "Xx", "Missing position"),
            positioned(201, 19, 4), // group out of range
            positioned(202, 5, 2),  // lands on a structural gap
            positioned(203, 1, 1),  // collides with 1
        ]);
        let layout = TableLayout::compute(&table);

        assert_eq!(layout.position_of(1), Some(GridPos::new(1, 1)));
        let anomalies: Vec<(u16, GridPos)> =
            layout.anomalies().map(|e| (e.atomic_number, e.pos)).collect();
        assert_eq!(
            anomalies,
            vec![
                (200, GridPos::new(ANOMALY_ROW, 1)),
                (201, GridPos::new(ANOMALY_ROW, 2)),
                (202, GridPos::new(ANOMALY_ROW, 3)),
                (203, GridPos::new(ANOMALY_ROW, 4)),
            ]
        );
        assert_eq!(layout.rows(), ANOMALY_ROW);
    }

    #[test]
    fn fblock_number_without_position_uses_series_slot() {
        let table = ElementTable::from_records(vec![ElementRecord::new(92, "U", "Uranium")]);
        let layout = TableLayout::compute(&table);
        assert_eq!(layout.position_of(92), Some(GridPos::new(ACTINIDE_ROW, 6)));
    }

    #[test]
    fn categorised_fblock_outside_range_is_anomalous() {
        let mut odd = ElementRecord::new(150, "Zq", "Oddium");
        odd.category = Some("lanthanide".into());
        let layout = TableLayout::compute(&ElementTable::from_records(vec![odd]));
        assert_eq!(layout.anomalies().count(), 1);
    }

    #[test]
    fn anomaly_row_wraps() {
        let records: Vec<ElementRecord> = (200..220)
            .map(|z| ElementRecord::new(z, format!("X{}", z), "Stray"))
            .collect();
        let layout = TableLayout::compute(&ElementTable::from_records(records));
        assert_eq!(layout.position_of(217), Some(GridPos::new(ANOMALY_ROW, 18)));
        assert_eq!(layout.position_of(218), Some(GridPos::new(ANOMALY_ROW + 1, 1)));
        assert_eq!(layout.rows(), ANOMALY_ROW + 1);
    }

    #[test]
    fn thousands_of_strays_get_distinct_cells() {
        let records: Vec<ElementRecord> = (200..5200)
            .map(|z| ElementRecord::new(z, format!("X{}", z), "Stray"))
            .collect();
        let layout = TableLayout::compute(&ElementTable::from_records(records));
        assert_eq!(layout.anomalies().count(), 5000);

        let cells: HashSet<GridPos> = layout.elements.iter().map(|e| e.pos).collect();
        assert_eq!(cells.len(), 5000);
        assert!(layout.elements.iter().all(|e| e.pos.row >= ANOMALY_ROW));
        assert_eq!(layout.position_of(5199), Some(GridPos::new(ANOMALY_ROW + 277, 14)));
        assert_eq!(layout.rows(), ANOMALY_ROW + 277);
    }

    #[test]
    fn anomaly_slot_covers_every_atomic_number() {
        assert_eq!(anomaly_slot(0), GridPos::new(ANOMALY_ROW, 1));
        assert_eq!(anomaly_slot(u16::MAX), GridPos::new(ANOMALY_ROW + 3640, 16));
    }

    #[test]
    fn empty_table_keeps_structure() {
        let layout = TableLayout::compute(&ElementTable::default());
        assert!(layout.elements.is_empty());
        assert_eq!(layout.structural.len(), gap_positions().count() + 2);
        assert_eq!(layout.rows(), ACTINIDE_ROW);
    }
}
