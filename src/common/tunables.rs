//! Tunable gameplay constants.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    /// Physics length unit in world units (one tile).
    pub length_unit: f32,
    /// Composite speed in world units per second.
    pub guy_speed: f32,
    /// Pointer distance at or below which the composite does not move.
    pub dead_zone: f32,
    /// Health delta emitted once per frame while moving.
    pub move_hp_cost: f32,
    /// Subtracted from each body dimension to get the physics footprint.
    pub composite_margin: f32,
    pub composite_depth: f32,
    /// Measured from the map's top-left corner, y down, like positions authored in Tiled.
    pub spawn_position: Vec2,
    pub animation_fps: f32,
    pub max_hp: f32,
    pub initial_hp: f32,
    pub bar_full_width: f32,
    pub bar_height: f32,
    pub bar_margin: f32,
    pub bar_offset: Vec2,
    /// Per-frame camera follow factor; 1.0 snaps onto the target.
    pub camera_lerp: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            length_unit: 16.0,
            guy_speed: 100.0,
            dead_zone: 5.0,
            move_hp_cost: -0.1,
            composite_margin: 4.0,
            composite_depth: 100.0,
            spawn_position: Vec2::new(100.0, 100.0),
            animation_fps: 24.0,
            max_hp: 100.0,
            initial_hp: 80.0,
            bar_full_width: 100.0,
            bar_height: 10.0,
            bar_margin: 2.0,
            bar_offset: Vec2::new(10.0, 10.0),
            camera_lerp: 1.0,
        }
    }
}
