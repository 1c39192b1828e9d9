#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core vocabulary shared across the Mars Rover workspace.
//!
//! This crate defines the coordinate, heading, terrain, and command types that
//! connect the immutable world data, the pure driving and routing systems, and
//! the command-line adapter. Everything here is plain data with small pure
//! functions; no crate in the workspace mutates these values behind a caller's
//! back.

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the rover console boots.
pub const WELCOME_BANNER: &str = "Mars Rover ready.";

/// Upper bound on grid width and height accepted by the world crate.
///
/// Keeps every cell index and path length comfortably inside the dense `u16`
/// distance tables used by the routing system.
pub const MAX_GRID_DIMENSION: u32 = 128;

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Applies a unit offset to the cell using checked arithmetic.
    ///
    /// Returns `None` when the offset would leave the `u32` coordinate range,
    /// which callers treat the same as stepping off the grid. Bounds against a
    /// particular grid remain the caller's responsibility.
    #[must_use]
    pub fn offset_by(self, column_delta: i32, row_delta: i32) -> Option<CellCoord> {
        let column = apply_delta(self.column, column_delta)?;
        let row = apply_delta(self.row, row_delta)?;
        Some(CellCoord::new(column, row))
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }
}

fn apply_delta(value: u32, delta: i32) -> Option<u32> {
    if delta.is_negative() {
        value.checked_sub(delta.unsigned_abs())
    } else {
        value.checked_add(delta.unsigned_abs())
    }
}

/// Cardinal headings the rover may face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Facing toward decreasing row indices.
    North,
    /// Facing toward increasing column indices.
    East,
    /// Facing toward increasing row indices.
    South,
    /// Facing toward decreasing column indices.
    West,
}

impl Heading {
    /// Parses a heading from its single-letter construction token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Heading> {
        match token {
            "N" => Some(Heading::North),
            "E" => Some(Heading::East),
            "S" => Some(Heading::South),
            "W" => Some(Heading::West),
            _ => None,
        }
    }

    /// Single-letter token naming the heading.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Heading::North => "N",
            Heading::East => "E",
            Heading::South => "S",
            Heading::West => "W",
        }
    }

    /// Heading after a quarter turn counter-clockwise in the rover's frame.
    #[must_use]
    pub const fn turned_left(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Heading after a quarter turn clockwise in the rover's frame.
    #[must_use]
    pub const fn turned_right(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit column/row offset of a single forward step along the heading.
    ///
    /// Backward movement negates both components, so a forward step followed
    /// by a backward step always cancels out.
    #[must_use]
    pub const fn forward_offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

/// Terrain classification assigned to every grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Open plains the rover can traverse.
    Plain,
    /// Impassable mountain terrain.
    Mountain,
    /// Impassable crevasse terrain.
    Crevasse,
}

impl TerrainKind {
    /// Parses a terrain kind from its one-letter map symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<TerrainKind> {
        match symbol {
            'P' => Some(TerrainKind::Plain),
            'M' => Some(TerrainKind::Mountain),
            'C' => Some(TerrainKind::Crevasse),
            _ => None,
        }
    }

    /// One-letter symbol used for the terrain in map files.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            TerrainKind::Plain => 'P',
            TerrainKind::Mountain => 'M',
            TerrainKind::Crevasse => 'C',
        }
    }

    /// Reports whether the terrain blocks the rover.
    #[must_use]
    pub const fn is_obstacle(self) -> bool {
        match self {
            TerrainKind::Plain => false,
            TerrainKind::Mountain | TerrainKind::Crevasse => true,
        }
    }
}

/// Commands the rover recognizes in a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advance one cell along the current heading.
    MoveForward,
    /// Retreat one cell against the current heading.
    MoveBackward,
    /// Rotate a quarter turn counter-clockwise without moving.
    TurnLeft,
    /// Rotate a quarter turn clockwise without moving.
    TurnRight,
}

impl Command {
    /// Parses a command from its single-letter batch token.
    ///
    /// Any token outside `F`, `B`, `L`, and `R` is an invalid command, which
    /// the driving system reports distinctly from an obstacle.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Command> {
        match token {
            "F" => Some(Command::MoveForward),
            "B" => Some(Command::MoveBackward),
            "L" => Some(Command::TurnLeft),
            "R" => Some(Command::TurnRight),
            _ => None,
        }
    }
}

/// Outcome of the most recent command batch, carried on the rover state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoverStatus {
    /// The last command, if any, applied successfully.
    Ok,
    /// A valid command would have entered blocked or off-grid terrain.
    Obstacle,
    /// A batch token did not name a recognized command.
    InvalidCommand,
}
