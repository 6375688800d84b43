//! Headless Scene Probe
//!
//! Runs placement commands and sketch extraction against JSON snapshots and
//! prints the results as JSON.
//!
//! Usage:
//!   cargo run --bin scene_probe -- place --scene scene.json --command cmd.json --seed 7
//!   cargo run --bin scene_probe -- rooms --sketch sketch.json

use clap::{Parser, Subcommand};
use scene_geometry::command::{CommandExecutor, CommandRecord};
use scene_geometry::core::{GeometryConfig, Result};
use scene_geometry::room::{CanvasBounds, GridSegment, RoomTopologyExtractor};
use scene_geometry::SceneObjectRef;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Scene Probe - placement and room extraction from the command line
#[derive(Parser, Debug)]
#[command(name = "scene_probe")]
#[command(about = "Resolve placement commands and extract rooms from sketches")]
struct Args {
    /// Optional TOML file overriding geometry constants
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place an object relative to another one
    Place {
        /// Scene snapshot: JSON array of objects
        #[arg(long)]
        scene: PathBuf,

        /// Command record JSON
        #[arg(long)]
        command: PathBuf,

        /// Random seed for room interior sampling
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Extract rooms from a wall sketch
    Rooms {
        /// Sketch JSON: segments, gridSize, canvas
        #[arg(long)]
        sketch: PathBuf,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Sketch {
    segments: Vec<GridSegment>,
    grid_size: f32,
    canvas: CanvasBounds,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("scene_geometry=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GeometryConfig::from_toml_str(&fs::read_to_string(path)?)?,
        None => GeometryConfig::default(),
    };

    match args.command {
        Command::Place {
            scene,
            command,
            seed,
        } => {
            let scene: Vec<SceneObjectRef> = serde_json::from_str(&fs::read_to_string(scene)?)?;
            let record: CommandRecord = serde_json::from_str(&fs::read_to_string(command)?)?;
            tracing::info!(objects = scene.len(), "Loaded scene snapshot");

            let mut executor = CommandExecutor::with_config(config, seed);
            let outcome = executor.execute(&record, &scene)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Command::Rooms { sketch } => {
            let sketch: Sketch = serde_json::from_str(&fs::read_to_string(sketch)?)?;
            let extractor = RoomTopologyExtractor::with_config(config);
            let rooms = extractor.extract(&sketch.segments, sketch.grid_size, sketch.canvas)?;
            println!("{}", serde_json::to_string_pretty(&rooms)?);
        }
    }

    Ok(())
}
