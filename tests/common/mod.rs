//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `topdown_guy::game::configure_headless` to install gameplay plugins.

#![allow(dead_code)]

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use topdown_guy::plugins::guy::Guy;
use topdown_guy::plugins::input::PointerState;

pub fn app_headless() -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so asset and scene resources exist for physics.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    topdown_guy::game::configure_headless(&mut app);
    app
}

/// Boot into `InGame` and run the setup frame.
pub fn app_in_game() -> App {
    let mut app = app_headless();
    app.update();
    app
}

/// Headless apps have no window, so tests drive the pointer snapshot directly.
pub fn set_pointer(app: &mut App, world: Vec2, is_down: bool) {
    let mut pointer = app.world_mut().resource_mut::<PointerState>();
    pointer.world = world;
    pointer.is_down = is_down;
}

pub fn guy(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<Entity, With<Guy>>()
        .single(app.world())
        .expect("exactly one guy")
}
