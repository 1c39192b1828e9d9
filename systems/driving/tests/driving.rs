use mars_rover_core::{CellCoord, Heading, RoverStatus};
use mars_rover_system_driving::Rover;
use mars_rover_world::{AdjacencyIndex, TerrainGrid};

const SURVEY_MAP: [&str; 5] = ["PPPCP", "PMPCP", "PMPCP", "PMPPP", "PMPPP"];

fn survey_grid() -> TerrainGrid {
    TerrainGrid::from_rows(&SURVEY_MAP).expect("survey map parses")
}

fn rover_at_center(grid: &TerrainGrid) -> Rover {
    Rover::with_heading_token(grid, CellCoord::new(2, 2), "N")
}

#[test]
fn forward_moves_one_cell_north() {
    let grid = survey_grid();
    let mut rover = rover_at_center(&grid);

    let state = rover.execute(&grid, ["F"]);

    assert_eq!(state.status, RoverStatus::Ok);
    assert_eq!(state.position, CellCoord::new(2, 1));
    assert_eq!(state.heading, Heading::North);
}

#[test]
fn backward_moves_one_cell_south() {
    let grid = survey_grid();
    let mut rover = rover_at_center(&grid);

    let state = rover.execute(&grid, ["B"]);

    assert_eq!(state.status, RoverStatus::Ok);
    assert_eq!(state.position, CellCoord::new(2, 3));
    assert_eq!(state.heading, Heading::North);
}

#[test]
fn mountain_west_of_center_halts_the_batch() {
    let grid = survey_grid();
    let mut rover = rover_at_center(&grid);

    let state = rover.execute(&grid, ["L", "F"]);

    assert_eq!(state.status, RoverStatus::Obstacle);
    assert_eq!(state.position, CellCoord::new(2, 2));
    assert_eq!(state.heading, Heading::West);
}

#[test]
fn crevasse_east_of_the_northern_edge_halts_the_batch() {
    let grid = survey_grid();
    let mut rover = rover_at_center(&grid);

    let state = rover.execute(&grid, ["F", "F", "R", "F"]);

    assert_eq!(state.status, RoverStatus::Obstacle);
    assert_eq!(state.position, CellCoord::new(2, 0));
    assert_eq!(state.heading, Heading::East);
}

#[test]
fn the_grid_edge_reports_the_same_condition_as_an_obstacle() {
    let grid = survey_grid();
    let mut rover = rover_at_center(&grid);

    let state = rover.execute(&grid, ["F", "F", "F"]);

    assert_eq!(state.status, RoverStatus::Obstacle);
    assert_eq!(state.position, CellCoord::new(2, 0));
    assert_eq!(state.heading, Heading::North);
}

#[test]
fn unknown_token_halts_with_invalid_command() {
    let grid = survey_grid();
    let mut rover = rover_at_center(&grid);

    let state = rover.execute(&grid, ["X"]);

    assert_eq!(state.status, RoverStatus::InvalidCommand);
    assert_eq!(state.position, CellCoord::new(2, 2));
    assert_eq!(state.heading, Heading::North);
}

#[test]
fn tokens_after_the_halt_are_never_applied() {
    let grid = survey_grid();

    let mut halted = rover_at_center(&grid);
    let halted_state = halted.execute(&grid, ["F", "R", "X", "F", "F"]);
    assert_eq!(halted_state.status, RoverStatus::InvalidCommand);

    // The committed state matches executing only the prefix before the halt.
    let mut prefix_only = rover_at_center(&grid);
    let prefix_state = prefix_only.execute(&grid, ["F", "R"]);
    assert_eq!(halted_state.position, prefix_state.position);
    assert_eq!(halted_state.heading, prefix_state.heading);
}

#[test]
fn obstacle_halt_preserves_the_prefix_state() {
    let grid = survey_grid();

    let mut halted = rover_at_center(&grid);
    let halted_state = halted.execute(&grid, ["F", "F", "R", "F", "L", "F"]);
    assert_eq!(halted_state.status, RoverStatus::Obstacle);

    let mut prefix_only = rover_at_center(&grid);
    let prefix_state = prefix_only.execute(&grid, ["F", "F", "R"]);
    assert_eq!(halted_state.position, prefix_state.position);
    assert_eq!(halted_state.heading, prefix_state.heading);
}

#[test]
fn empty_batch_leaves_the_state_unchanged() {
    let grid = survey_grid();
    let mut rover = rover_at_center(&grid);
    let before = rover.state();

    let after = rover.execute(&grid, Vec::<String>::new());

    assert_eq!(after, before);
}

#[test]
fn route_planning_reports_a_plan_without_moving() {
    let grid = survey_grid();
    let index = AdjacencyIndex::build(&grid);
    let rover = rover_at_center(&grid);

    let result = rover.route_to(&index, &grid, CellCoord::new(2, 0));

    assert_eq!(result.distance(), Some(2));
    assert_eq!(
        result.path(),
        Some(
            [
                CellCoord::new(2, 2),
                CellCoord::new(2, 1),
                CellCoord::new(2, 0)
            ]
            .as_slice()
        )
    );
    assert_eq!(rover.position(), CellCoord::new(2, 2));
    assert_eq!(rover.status(), RoverStatus::Ok);
}

#[test]
fn route_to_blocked_destination_is_unreachable() {
    let grid = survey_grid();
    let index = AdjacencyIndex::build(&grid);
    let rover = rover_at_center(&grid);

    assert!(rover
        .route_to(&index, &grid, CellCoord::new(3, 0))
        .is_unreachable());
    assert!(rover
        .route_to(&index, &grid, CellCoord::new(1, 3))
        .is_unreachable());
}

#[test]
fn success_after_an_earlier_failure_restores_ok() {
    let grid = survey_grid();
    let mut rover = rover_at_center(&grid);

    let first = rover.execute(&grid, ["X"]);
    assert_eq!(first.status, RoverStatus::InvalidCommand);

    let second = rover.execute(&grid, ["F"]);
    assert_eq!(second.status, RoverStatus::Ok);
    assert_eq!(second.position, CellCoord::new(2, 1));
}
