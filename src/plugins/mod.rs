//! Feature plugins.

use bevy::prelude::*;

pub mod animation;
pub mod core;
pub mod guy;
pub mod health;
pub mod input;
pub mod physics;
pub mod world;

// Render-only
pub mod camera;
pub mod sprites;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    input::plugin(app);
    world::plugin(app);
    guy::plugin(app);
    animation::plugin(app);
    health::plugin(app);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    sprites::plugin(app);
    camera::plugin(app);
    physics::debug_plugin(app);
}

