#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shortest-path routing over the terrain adjacency index.
//!
//! The search is an unweighted breadth-first search: every hop costs one, so
//! the first time a cell is reached its distance is final. Unreachable
//! destinations are an expected outcome reported through [`PathResult`],
//! never an error.

use std::collections::VecDeque;

use mars_rover_core::CellCoord;
use mars_rover_world::{AdjacencyIndex, TerrainGrid};
use serde::Serialize;

const UNREACHED: u16 = u16::MAX;

/// Outcome of a shortest-path query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum PathResult {
    /// The destination can be reached; the path runs from source to
    /// destination inclusive and holds `distance + 1` cells.
    Reachable {
        /// Minimum number of hops between source and destination.
        distance: u32,
        /// One shortest path, source first and destination last.
        path: Vec<CellCoord>,
    },
    /// No obstacle-free route exists, or the destination itself is blocked
    /// or off the grid.
    Unreachable,
}

impl PathResult {
    /// Hop count of the route, if one exists.
    #[must_use]
    pub fn distance(&self) -> Option<u32> {
        match self {
            PathResult::Reachable { distance, .. } => Some(*distance),
            PathResult::Unreachable => None,
        }
    }

    /// Cells of the route from source to destination, if one exists.
    #[must_use]
    pub fn path(&self) -> Option<&[CellCoord]> {
        match self {
            PathResult::Reachable { path, .. } => Some(path),
            PathResult::Unreachable => None,
        }
    }

    /// Reports whether the query found no route.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, PathResult::Unreachable)
    }
}

/// Breadth-first pathfinder with reusable per-cell tables.
///
/// The distance table defaults to an unreachable sentinel everywhere except
/// the source; the parent table records, for every reached cell, the cell it
/// was first reached from so the path can be reconstructed backward. Buffers
/// survive between queries so repeated routing avoids reallocation.
#[derive(Clone, Debug, Default)]
pub struct PathFinder {
    distances: Vec<u16>,
    parents: Vec<Option<CellCoord>>,
    frontier: VecDeque<CellCoord>,
}

impl PathFinder {
    /// Creates a pathfinder with empty workspace buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes a shortest obstacle-free path between two grid cells.
    ///
    /// A blocked or off-grid destination reports [`PathResult::Unreachable`]
    /// without searching. When several shortest paths exist, which one is
    /// returned depends on neighbor enumeration order; only the length is
    /// guaranteed.
    #[must_use]
    pub fn shortest_path(
        &mut self,
        index: &AdjacencyIndex,
        grid: &TerrainGrid,
        source: CellCoord,
        destination: CellCoord,
    ) -> PathResult {
        if !grid.is_traversable(destination) {
            return PathResult::Unreachable;
        }

        let (columns, rows) = index.dimensions();
        let width = usize::try_from(columns).unwrap_or(0);
        let cell_count = width.checked_mul(usize::try_from(rows).unwrap_or(0)).unwrap_or(0);
        if cell_count == 0 {
            return PathResult::Unreachable;
        }

        self.reset(cell_count);

        let Some(source_index) = cell_index(width, columns, rows, source) else {
            return PathResult::Unreachable;
        };
        self.distances[source_index] = 0;
        self.frontier.push_back(source);

        while let Some(cell) = self.frontier.pop_front() {
            let Some(current_index) = cell_index(width, columns, rows, cell) else {
                continue;
            };
            let current_distance = self.distances[current_index];

            if current_distance >= UNREACHED.saturating_sub(1) {
                continue;
            }

            let next_distance = current_distance + 1;

            for neighbor in index.neighbors(cell) {
                let Some(neighbor_index) = cell_index(width, columns, rows, *neighbor) else {
                    continue;
                };

                if self.distances[neighbor_index] <= next_distance {
                    continue;
                }

                self.distances[neighbor_index] = next_distance;
                self.parents[neighbor_index] = Some(cell);
                self.frontier.push_back(*neighbor);
            }
        }

        let Some(destination_index) = cell_index(width, columns, rows, destination) else {
            return PathResult::Unreachable;
        };
        let distance = self.distances[destination_index];
        if distance == UNREACHED {
            return PathResult::Unreachable;
        }

        let Some(path) = self.reconstruct(width, columns, rows, source, destination, distance)
        else {
            return PathResult::Unreachable;
        };

        PathResult::Reachable {
            distance: u32::from(distance),
            path,
        }
    }

    fn reset(&mut self, cell_count: usize) {
        if self.distances.len() != cell_count {
            self.distances = vec![UNREACHED; cell_count];
        } else {
            self.distances.fill(UNREACHED);
        }
        if self.parents.len() != cell_count {
            self.parents = vec![None; cell_count];
        } else {
            self.parents.fill(None);
        }
        self.frontier.clear();
    }

    fn reconstruct(
        &self,
        width: usize,
        columns: u32,
        rows: u32,
        source: CellCoord,
        destination: CellCoord,
        distance: u16,
    ) -> Option<Vec<CellCoord>> {
        let mut path = Vec::with_capacity(usize::from(distance) + 1);
        let mut cursor = destination;
        path.push(cursor);

        while cursor != source {
            let parent = cell_index(width, columns, rows, cursor)
                .and_then(|index| self.parents.get(index).copied().flatten())?;
            cursor = parent;
            path.push(cursor);
        }

        path.reverse();
        Some(path)
    }
}

/// Convenience wrapper that runs a single query on a fresh [`PathFinder`].
#[must_use]
pub fn shortest_path(
    index: &AdjacencyIndex,
    grid: &TerrainGrid,
    source: CellCoord,
    destination: CellCoord,
) -> PathResult {
    PathFinder::new().shortest_path(index, grid, source, destination)
}

fn cell_index(width: usize, columns: u32, rows: u32, cell: CellCoord) -> Option<usize> {
    if cell.column() >= columns || cell.row() >= rows {
        return None;
    }
    let column = usize::try_from(cell.column()).ok()?;
    let row = usize::try_from(cell.row()).ok()?;
    row.checked_mul(width)?.checked_add(column)
}

#[cfg(test)]
mod tests {
    use super::{shortest_path, PathFinder, PathResult};
    use mars_rover_core::CellCoord;
    use mars_rover_world::{AdjacencyIndex, TerrainGrid};

    fn survey() -> (TerrainGrid, AdjacencyIndex) {
        let grid = TerrainGrid::from_rows(&["PPPCP", "PMPCP", "PMPCP", "PMPPP", "PMPPP"])
            .expect("survey map parses");
        let index = AdjacencyIndex::build(&grid);
        (grid, index)
    }

    #[test]
    fn source_equal_to_destination_costs_nothing() {
        let (grid, index) = survey();
        let cell = CellCoord::new(2, 2);

        let result = shortest_path(&index, &grid, cell, cell);

        assert_eq!(result.distance(), Some(0));
        assert_eq!(result.path(), Some([cell].as_slice()));
    }

    #[test]
    fn blocked_destination_skips_the_search() {
        let (grid, index) = survey();
        let source = CellCoord::new(2, 2);

        assert!(shortest_path(&index, &grid, source, CellCoord::new(1, 1)).is_unreachable());
        assert!(shortest_path(&index, &grid, source, CellCoord::new(3, 0)).is_unreachable());
        assert!(shortest_path(&index, &grid, source, CellCoord::new(6, 6)).is_unreachable());
    }

    #[test]
    fn reused_pathfinder_matches_fresh_queries() {
        let (grid, index) = survey();
        let mut finder = PathFinder::new();
        let pairs = [
            (CellCoord::new(2, 2), CellCoord::new(2, 0)),
            (CellCoord::new(2, 2), CellCoord::new(4, 0)),
            (CellCoord::new(0, 0), CellCoord::new(0, 4)),
            (CellCoord::new(2, 2), CellCoord::new(1, 1)),
        ];

        for (source, destination) in pairs {
            let reused = finder.shortest_path(&index, &grid, source, destination);
            let fresh = shortest_path(&index, &grid, source, destination);
            assert_eq!(reused.distance(), fresh.distance());
            assert_eq!(reused.is_unreachable(), fresh.is_unreachable());
        }
    }

    #[test]
    fn distances_are_bounded_below_by_manhattan() {
        let (grid, index) = survey();
        let source = CellCoord::new(2, 2);

        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                let destination = CellCoord::new(column, row);
                if let PathResult::Reachable { distance, .. } =
                    shortest_path(&index, &grid, source, destination)
                {
                    assert!(distance >= source.manhattan_distance(destination));
                }
            }
        }
    }
}
