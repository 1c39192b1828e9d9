#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command execution for the Mars rover.
//!
//! The rover is a small state machine over `{ position, heading, status }`.
//! A batch of command tokens is processed strictly in order; the first token
//! that is unrecognized or would enter blocked terrain halts the batch, and
//! every later token is never observed to apply. Obstacle and invalid-command
//! outcomes are ordinary reported state, not errors.

use mars_rover_core::{CellCoord, Command, Heading, RoverStatus};
use mars_rover_system_routing::{shortest_path, PathResult};
use mars_rover_world::{AdjacencyIndex, TerrainGrid};
use serde::Serialize;

/// Heading substituted when the construction token is unrecognized.
///
/// The fallback is deterministic so rover construction stays reproducible;
/// callers that care about the heading should pass a valid token.
pub const DEFAULT_HEADING: Heading = Heading::North;

/// Snapshot of the rover after a command batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RoverState {
    /// Last successfully committed position.
    pub position: CellCoord,
    /// Last successfully committed heading.
    pub heading: Heading,
    /// Outcome of the most recent batch, or of construction.
    pub status: RoverStatus,
}

/// Directional rover navigating an immutable terrain grid.
#[derive(Clone, Debug)]
pub struct Rover {
    position: CellCoord,
    heading: Heading,
    status: RoverStatus,
}

impl Rover {
    /// Creates a rover at the provided position and heading.
    ///
    /// The position and heading are recorded as given even when the position
    /// is out of bounds or obstacle terrain; such a rover starts with status
    /// [`RoverStatus::Obstacle`] and stays put until commanded somewhere
    /// traversable.
    #[must_use]
    pub fn new(grid: &TerrainGrid, position: CellCoord, heading: Heading) -> Self {
        let status = if grid.is_traversable(position) {
            RoverStatus::Ok
        } else {
            RoverStatus::Obstacle
        };
        Self {
            position,
            heading,
            status,
        }
    }

    /// Creates a rover from a raw heading token.
    ///
    /// An unrecognized token falls back to [`DEFAULT_HEADING`].
    #[must_use]
    pub fn with_heading_token(grid: &TerrainGrid, position: CellCoord, token: &str) -> Self {
        let heading = Heading::from_token(token).unwrap_or(DEFAULT_HEADING);
        Self::new(grid, position, heading)
    }

    /// Current position of the rover.
    #[must_use]
    pub const fn position(&self) -> CellCoord {
        self.position
    }

    /// Current heading of the rover.
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Status left by the most recent batch or by construction.
    #[must_use]
    pub const fn status(&self) -> RoverStatus {
        self.status
    }

    /// Captures the rover's current state.
    #[must_use]
    pub const fn state(&self) -> RoverState {
        RoverState {
            position: self.position,
            heading: self.heading,
            status: self.status,
        }
    }

    /// Executes a batch of raw command tokens strictly in order.
    ///
    /// Each recognized token produces a candidate position/heading pair that
    /// commits only if the candidate position is traversable. An unrecognized
    /// token halts the batch with [`RoverStatus::InvalidCommand`]; a candidate
    /// that leaves the grid or enters obstacle terrain halts it with
    /// [`RoverStatus::Obstacle`]. Either way the last committed position and
    /// heading are preserved. An empty batch leaves the state untouched.
    pub fn execute<I>(&mut self, grid: &TerrainGrid, commands: I) -> RoverState
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in commands {
            let Some(command) = Command::from_token(token.as_ref()) else {
                self.status = RoverStatus::InvalidCommand;
                break;
            };

            let candidate = match self.candidate_for(command) {
                Some(candidate) => candidate,
                None => {
                    // Stepping outside the coordinate range is the same
                    // condition as stepping off the grid.
                    self.status = RoverStatus::Obstacle;
                    break;
                }
            };

            if grid.is_traversable(candidate.position) {
                self.position = candidate.position;
                self.heading = candidate.heading;
                self.status = RoverStatus::Ok;
            } else {
                self.status = RoverStatus::Obstacle;
                break;
            }
        }

        self.state()
    }

    /// Plans a shortest obstacle-free route from the rover's position.
    ///
    /// Delegates to the routing system and never mutates rover state; the
    /// result is a plan, not a move.
    #[must_use]
    pub fn route_to(
        &self,
        index: &AdjacencyIndex,
        grid: &TerrainGrid,
        destination: CellCoord,
    ) -> PathResult {
        shortest_path(index, grid, self.position, destination)
    }

    fn candidate_for(&self, command: Command) -> Option<Candidate> {
        match command {
            Command::TurnLeft => Some(Candidate {
                position: self.position,
                heading: self.heading.turned_left(),
            }),
            Command::TurnRight => Some(Candidate {
                position: self.position,
                heading: self.heading.turned_right(),
            }),
            Command::MoveForward | Command::MoveBackward => {
                let (column_delta, row_delta) = self.heading.forward_offset();
                let (column_delta, row_delta) = if command == Command::MoveBackward {
                    (-column_delta, -row_delta)
                } else {
                    (column_delta, row_delta)
                };
                self.position
                    .offset_by(column_delta, row_delta)
                    .map(|position| Candidate {
                        position,
                        heading: self.heading,
                    })
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Candidate {
    position: CellCoord,
    heading: Heading,
}
