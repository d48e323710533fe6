use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::config::GameConfig;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let length_unit = app.world().resource::<Tunables>().length_unit;
    let gravity = app
        .world()
        .get_resource::<GameConfig>()
        .map_or(Vec2::ZERO, |config| config.gravity);

    app.add_plugins(PhysicsPlugins::default().with_length_unit(length_unit));
    app.insert_resource(Gravity(gravity));
}

/// Collider overlay (render-only, needs gizmos).
pub fn debug_plugin(app: &mut App) {
    let enabled = app
        .world()
        .get_resource::<GameConfig>()
        .is_some_and(|config| config.physics_debug);

    if enabled && !app.is_plugin_added::<PhysicsDebugPlugin>() {
        app.add_plugins(PhysicsDebugPlugin::default());
    }
}
