#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives a rover across a terrain map.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use mars_rover_core::{CellCoord, RoverStatus, WELCOME_BANNER};
use mars_rover_system_driving::{Rover, RoverState};
use mars_rover_system_routing::PathResult;
use mars_rover_world::{AdjacencyIndex, TerrainGrid};
use serde::Serialize;

/// Survey map from the original mission briefing, used when no map file is
/// provided.
const DEFAULT_MAP: [&str; 5] = ["PPPCP", "PMPCP", "PMPCP", "PMPPP", "PMPPP"];

#[derive(Debug, Parser)]
#[command(
    name = "mars-rover",
    about = "Execute rover command batches and plan shortest routes over a terrain map"
)]
struct Cli {
    /// Terrain map file with one row of P/M/C symbols per line.
    #[arg(long)]
    map: Option<PathBuf>,

    /// Starting cell expressed as `column,row`.
    #[arg(long, default_value = "2,2", value_parser = parse_cell)]
    start: CellCoord,

    /// Starting heading token (N, E, S, W). Unrecognized tokens fall back
    /// to north.
    #[arg(long, default_value = "N")]
    heading: String,

    /// Plan a shortest route from the rover's final position to this
    /// `column,row` cell.
    #[arg(long, value_parser = parse_cell)]
    route: Option<CellCoord>,

    /// Emit the report as JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// Command tokens executed in order (F, B, L, R).
    commands: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Report {
    state: RoverState,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<PathResult>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let grid = load_grid(cli.map.as_deref())?;
    let mut rover = Rover::with_heading_token(&grid, cli.start, &cli.heading);
    let state = rover.execute(&grid, cli.commands.iter().map(String::as_str));

    let route = cli.route.map(|destination| {
        let index = AdjacencyIndex::build(&grid);
        rover.route_to(&index, &grid, destination)
    });

    let report = Report { state, route };
    if cli.json {
        let rendered =
            serde_json::to_string_pretty(&report).context("serialize rover report")?;
        println!("{rendered}");
    } else {
        print_report(&report);
    }

    Ok(())
}

fn load_grid(path: Option<&Path>) -> Result<TerrainGrid> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read terrain map {}", path.display()))?;
            let rows: Vec<&str> = contents
                .lines()
                .map(str::trim)
                .filter(|row| !row.is_empty())
                .collect();
            TerrainGrid::from_rows(&rows)
                .with_context(|| format!("parse terrain map {}", path.display()))
        }
        None => TerrainGrid::from_rows(&DEFAULT_MAP).context("parse embedded terrain map"),
    }
}

fn print_report(report: &Report) {
    println!("{WELCOME_BANNER}");
    println!("status: {}", status_label(report.state.status));
    println!(
        "position: ({}, {})",
        report.state.position.column(),
        report.state.position.row()
    );
    println!("heading: {}", report.state.heading.token());

    if let Some(route) = &report.route {
        match route {
            PathResult::Reachable { distance, path } => {
                let cells: Vec<String> = path
                    .iter()
                    .map(|cell| format!("({}, {})", cell.column(), cell.row()))
                    .collect();
                println!("route: {distance} hops via {}", cells.join(" -> "));
            }
            PathResult::Unreachable => println!("route: unreachable"),
        }
    }
}

fn status_label(status: RoverStatus) -> &'static str {
    match status {
        RoverStatus::Ok => "OK",
        RoverStatus::Obstacle => "OBSTACLE",
        RoverStatus::InvalidCommand => "INVALID_COMMAND",
    }
}

fn parse_cell(raw: &str) -> Result<CellCoord, String> {
    let (column, row) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected `column,row`, got {raw:?}"))?;
    let column = column
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("bad column in {raw:?}: {error}"))?;
    let row = row
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("bad row in {raw:?}: {error}"))?;
    Ok(CellCoord::new(column, row))
}
