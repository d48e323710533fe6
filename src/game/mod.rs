//! Game composition root.
//!
//! Provides two public configuration functions:
//! - `configure_full`: includes DefaultPlugins (window/render) + game plugins.
//! - `configure_headless`: minimal configuration for integration tests.
//!
//! The scene lifecycle maps onto Bevy schedules: setup-once is `OnEnter(GameState::InGame)`,
//! the per-frame update is the `FrameSystems` chain in `Update`, and teardown is
//! `DespawnOnExit(GameState::InGame)` on everything the plugins spawn.

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::config::GameConfig;
use crate::common::state::GameState;
use crate::plugins;

pub fn run(config: GameConfig) {
    let mut app = App::new();
    configure_full(&mut app, config);
    app.run();
}

/// Full configuration for `cargo run`.
pub fn configure_full(app: &mut App, config: GameConfig) {
    let window_size = config.window_size();
    let default_plugins = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: config.title.clone(),
                resolution: WindowResolution::new(window_size.x, window_size.y),
                ..default()
            }),
            ..default()
        })
        .set(LogPlugin {
            level: if config.verbose { Level::DEBUG } else { Level::INFO },
            ..default()
        });

    // Pixel-art sheets must not be filtered.
    let default_plugins = if config.pixel_art {
        default_plugins.set(ImagePlugin::default_nearest())
    } else {
        default_plugins
    };

    app.add_plugins(default_plugins);

    app.insert_resource(config);
    configure_game(app);
    plugins::register_render(app);
}

/// Headless configuration for integration tests.
///
/// Notes:
/// - Do NOT add DefaultPlugins.
/// - Do NOT add render-only plugins (camera, sprites, tile visuals).
/// - Tests that need a specific map insert a `TileMap` resource before the first update;
///   otherwise the map at `GameConfig::map_path` is loaded.
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

/// Configuration shared by both full and headless apps.
fn configure_game(app: &mut App) {
    app.init_resource::<GameConfig>();
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
