#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Immutable terrain data for the Mars Rover workspace.
//!
//! The [`TerrainGrid`] is parsed once from rows of terrain symbols and never
//! mutated afterward, so it may be shared freely between any number of rovers
//! and routing queries. The [`AdjacencyIndex`] is derived from the grid and
//! lists, for every traversable cell, the traversable 4-connected neighbors
//! the rover could step to.

mod adjacency;

pub use adjacency::AdjacencyIndex;

use mars_rover_core::{CellCoord, TerrainKind, MAX_GRID_DIMENSION};
use thiserror::Error;

/// Reasons a terrain map fails to parse into a [`TerrainGrid`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The map contained no rows or an empty first row.
    #[error("terrain map is empty")]
    Empty,
    /// A row's length disagreed with the first row's length.
    #[error("row {row} holds {actual} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based index of the offending row.
        row: u32,
        /// Cell count established by the first row.
        expected: u32,
        /// Cell count actually present in the row.
        actual: u32,
    },
    /// A cell symbol did not name a known terrain kind.
    #[error("unknown terrain symbol {symbol:?} at column {column}, row {row}")]
    UnknownSymbol {
        /// The unrecognized map symbol.
        symbol: char,
        /// Zero-based column index of the cell.
        column: u32,
        /// Zero-based row index of the cell.
        row: u32,
    },
    /// The map exceeded the fixed width/height bound.
    #[error("grid of {columns}x{rows} exceeds the {max} cell bound", max = MAX_GRID_DIMENSION)]
    TooLarge {
        /// Parsed column count.
        columns: u32,
        /// Parsed row count.
        rows: u32,
    },
}

/// Immutable lookup of terrain per cell plus the grid bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    columns: u32,
    rows: u32,
    cells: Vec<TerrainKind>,
}

impl TerrainGrid {
    /// Parses a grid from rows of terrain symbols, top row first.
    ///
    /// Every row must contain the same number of symbols, every symbol must
    /// name a known [`TerrainKind`], and both dimensions must stay within
    /// [`MAX_GRID_DIMENSION`].
    pub fn from_rows<S: AsRef<str>>(map_rows: &[S]) -> Result<Self, GridError> {
        let first = map_rows.first().ok_or(GridError::Empty)?;
        let columns = u32::try_from(first.as_ref().chars().count()).unwrap_or(u32::MAX);
        let rows = u32::try_from(map_rows.len()).unwrap_or(u32::MAX);
        if columns == 0 {
            return Err(GridError::Empty);
        }
        if columns > MAX_GRID_DIMENSION || rows > MAX_GRID_DIMENSION {
            return Err(GridError::TooLarge { columns, rows });
        }

        let capacity = usize::try_from(u64::from(columns) * u64::from(rows)).unwrap_or(0);
        let mut cells = Vec::with_capacity(capacity);
        for (row_index, map_row) in map_rows.iter().enumerate() {
            let row = u32::try_from(row_index).unwrap_or(u32::MAX);
            let mut row_length = 0u32;
            for (column_index, symbol) in map_row.as_ref().chars().enumerate() {
                let column = u32::try_from(column_index).unwrap_or(u32::MAX);
                let terrain =
                    TerrainKind::from_symbol(symbol).ok_or(GridError::UnknownSymbol {
                        symbol,
                        column,
                        row,
                    })?;
                cells.push(terrain);
                row_length = row_length.saturating_add(1);
            }

            if row_length != columns {
                return Err(GridError::RaggedRow {
                    row,
                    expected: columns,
                    actual: row_length,
                });
            }
        }

        Ok(Self {
            columns,
            rows,
            cells,
        })
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Reports whether the cell lies within the grid bounds.
    #[must_use]
    pub const fn is_in_bounds(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Terrain assigned to the cell, if it lies within the grid.
    #[must_use]
    pub fn terrain(&self, cell: CellCoord) -> Option<TerrainKind> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Reports whether the cell blocks the rover.
    ///
    /// Out-of-bounds cells report `true` so they are never mistaken for open
    /// ground; callers that need to distinguish the two conditions check
    /// [`TerrainGrid::is_in_bounds`] first.
    #[must_use]
    pub fn is_obstacle(&self, cell: CellCoord) -> bool {
        self.terrain(cell)
            .map_or(true, TerrainKind::is_obstacle)
    }

    /// Reports whether the cell is in bounds and free of obstacle terrain.
    #[must_use]
    pub fn is_traversable(&self, cell: CellCoord) -> bool {
        self.is_in_bounds(cell) && !self.is_obstacle(cell)
    }

    pub(crate) fn index(&self, cell: CellCoord) -> Option<usize> {
        if self.is_in_bounds(cell) {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}
