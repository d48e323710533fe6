use std::path::PathBuf;

use clap::Parser;
use topdown_guy::common::config::{DEFAULT_MAP_PATH, GameConfig};

/// Top-down movement-and-aim sandbox on a tile map.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Tiled JSON map to load
    #[arg(long, default_value = DEFAULT_MAP_PATH)]
    map: PathBuf,

    /// Hide the physics collider overlay
    #[arg(long)]
    no_physics_debug: bool,

    /// Window pixels per world unit
    #[arg(long, default_value_t = 3.0)]
    zoom: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    topdown_guy::game::run(GameConfig {
        map_path: args.map,
        physics_debug: !args.no_physics_debug,
        zoom: args.zoom,
        verbose: args.verbose,
        ..Default::default()
    });
}
