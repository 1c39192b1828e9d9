//! Derived adjacency structure used by the routing system.

use mars_rover_core::CellCoord;

use crate::TerrainGrid;

/// Per-cell lists of traversable 4-connected neighbors.
///
/// The index is computed once from a [`TerrainGrid`] and mirrors its
/// dimensions. Obstacle and out-of-bounds cells own an empty list and never
/// appear in any other cell's list, so a search over the index can never
/// enter blocked terrain.
#[derive(Clone, Debug)]
pub struct AdjacencyIndex {
    columns: u32,
    rows: u32,
    neighbors: Vec<Vec<CellCoord>>,
}

impl AdjacencyIndex {
    /// Builds the adjacency lists for every traversable cell in the grid.
    #[must_use]
    pub fn build(grid: &TerrainGrid) -> Self {
        let columns = grid.columns();
        let rows = grid.rows();
        let cell_count_u64 = u64::from(columns) * u64::from(rows);
        let cell_count = usize::try_from(cell_count_u64).unwrap_or(0);

        let mut neighbors = vec![Vec::new(); cell_count];
        for row in 0..rows {
            for column in 0..columns {
                let cell = CellCoord::new(column, row);
                if !grid.is_traversable(cell) {
                    continue;
                }

                let Some(index) = grid.index(cell) else {
                    continue;
                };
                neighbors[index] = cardinal_neighbors(cell, columns, rows)
                    .filter(|neighbor| grid.is_traversable(*neighbor))
                    .collect();
            }
        }

        Self {
            columns,
            rows,
            neighbors,
        }
    }

    /// Traversable neighbors of the provided cell.
    ///
    /// Obstacle and out-of-bounds cells yield an empty slice.
    #[must_use]
    pub fn neighbors(&self, cell: CellCoord) -> &[CellCoord] {
        self.index(cell)
            .and_then(|index| self.neighbors.get(index))
            .map_or(&[], Vec::as_slice)
    }

    /// Dimensions of the grid the index was derived from.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}

fn cardinal_neighbors(cell: CellCoord, columns: u32, rows: u32) -> impl Iterator<Item = CellCoord> {
    let mut candidates = [None; 4];
    let mut count = 0;

    if let Some(row) = cell.row().checked_sub(1) {
        candidates[count] = Some(CellCoord::new(cell.column(), row));
        count += 1;
    }

    if let Some(column) = cell.column().checked_add(1) {
        if column < columns {
            candidates[count] = Some(CellCoord::new(column, cell.row()));
            count += 1;
        }
    }

    if let Some(row) = cell.row().checked_add(1) {
        if row < rows {
            candidates[count] = Some(CellCoord::new(cell.column(), row));
            count += 1;
        }
    }

    if let Some(column) = cell.column().checked_sub(1) {
        candidates[count] = Some(CellCoord::new(column, cell.row()));
        count += 1;
    }

    candidates.into_iter().take(count).flatten()
}

#[cfg(test)]
mod tests {
    use super::AdjacencyIndex;
    use crate::TerrainGrid;
    use mars_rover_core::CellCoord;

    fn survey_grid() -> TerrainGrid {
        TerrainGrid::from_rows(&["PPPCP", "PMPCP", "PMPCP", "PMPPP", "PMPPP"])
            .expect("survey map parses")
    }

    #[test]
    fn neighbors_exclude_obstacles_and_edges() {
        let grid = survey_grid();
        let index = AdjacencyIndex::build(&grid);

        // (0,0) sits in the corner with open plains east and south.
        let corner = index.neighbors(CellCoord::new(0, 0));
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&CellCoord::new(1, 0)));
        assert!(corner.contains(&CellCoord::new(0, 1)));

        // (0,1) loses its eastern neighbor to the mountain column.
        let beside_mountain = index.neighbors(CellCoord::new(0, 1));
        assert_eq!(beside_mountain.len(), 2);
        assert!(beside_mountain.contains(&CellCoord::new(0, 0)));
        assert!(beside_mountain.contains(&CellCoord::new(0, 2)));

        // (2,2) has plains above and below but a mountain west and crevasse east.
        let center = index.neighbors(CellCoord::new(2, 2));
        assert_eq!(center.len(), 2);
        assert!(center.contains(&CellCoord::new(2, 1)));
        assert!(center.contains(&CellCoord::new(2, 3)));
    }

    #[test]
    fn obstacle_cells_own_no_neighbors() {
        let grid = survey_grid();
        let index = AdjacencyIndex::build(&grid);

        assert!(index.neighbors(CellCoord::new(1, 1)).is_empty());
        assert!(index.neighbors(CellCoord::new(3, 0)).is_empty());
        assert!(index.neighbors(CellCoord::new(9, 9)).is_empty());
    }

    #[test]
    fn adjacency_relation_is_symmetric() {
        let grid = survey_grid();
        let index = AdjacencyIndex::build(&grid);

        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let cell = CellCoord::new(column, row);
                for neighbor in index.neighbors(cell) {
                    assert!(
                        index.neighbors(*neighbor).contains(&cell),
                        "neighbor relation must be symmetric between {cell:?} and {neighbor:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn every_listed_neighbor_is_traversable() {
        let grid = survey_grid();
        let index = AdjacencyIndex::build(&grid);

        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                for neighbor in index.neighbors(CellCoord::new(column, row)) {
                    assert!(grid.is_traversable(*neighbor));
                }
            }
        }
    }
}
