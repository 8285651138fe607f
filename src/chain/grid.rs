//! Grid geometry: which columns are clickable and what they select.
//!
//! Each strike row has eleven columns. Four of them are interactive:
//!
//! | col | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 |
//! |---|---|---|---|---|---|---|---|---|---|---|---|
//! | | Size | **Bid** | Mark | **Ask** | Size | Strike | Size | **Bid** | Mark | **Ask** | Size |

use crate::types::catalog::{STRIKE_CATALOG, Strike};
use crate::types::enums::{OptionKind, Side};

/// Index of the strike column.
pub const STRIKE_COLUMN: usize = 5;

/// One interactive cell position within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellTarget {
    pub kind: OptionKind,
    pub side: Side,
    /// Column index within the eleven-column row.
    pub column: usize,
}

/// Interactive cells of every row, left to right.
pub const CELL_TARGETS: [CellTarget; 4] = [
    CellTarget {
        kind: OptionKind::Call,
        side: Side::Bid,
        column: 1,
    },
    CellTarget {
        kind: OptionKind::Call,
        side: Side::Ask,
        column: 3,
    },
    CellTarget {
        kind: OptionKind::Put,
        side: Side::Bid,
        column: 7,
    },
    CellTarget {
        kind: OptionKind::Put,
        side: Side::Ask,
        column: 9,
    },
];

/// The interactive cell at `column`, if any.
pub fn target_at_column(column: usize) -> Option<CellTarget> {
    CELL_TARGETS.iter().copied().find(|t| t.column == column)
}

/// Resolve a (row, column) click into the `(side, strike)` it selects.
pub fn resolve_click(row: usize, column: usize) -> Option<(Side, Strike)> {
    let strike = STRIKE_CATALOG.get(row)?;
    let target = target_at_column(column)?;
    Some((target.side, strike.clone()))
}

/// Keyboard cursor over the interactive cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    /// Strike row.
    pub row: usize,
    /// Index into [`CELL_TARGETS`].
    pub cell: usize,
}

impl GridCursor {
    pub fn up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.row = (self.row + 1).min(STRIKE_CATALOG.len() - 1);
    }

    pub fn left(&mut self) {
        self.cell = self.cell.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cell = (self.cell + 1).min(CELL_TARGETS.len() - 1);
    }

    pub fn target(&self) -> CellTarget {
        CELL_TARGETS[self.cell.min(CELL_TARGETS.len() - 1)]
    }

    /// The `(side, strike)` under the cursor.
    pub fn selection(&self) -> Option<(Side, Strike)> {
        resolve_click(self.row, self.target().column)
    }
}
