//! World plugin: loads the tile map and builds its static collision geometry.
//!
//! ```text
//! OnEnter(InGame): load_map -> spawn_solid_tiles + spawn_bounds
//! Update/Constrain: clamp_to_world_bounds
//! ```
//!
//! Only the collidable layer produces physics bodies; tile visuals are spawned by the
//! render-only `sprites` plugin.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::config::{CollisionPolicy, GameConfig};
use crate::common::layers::Layer;
use crate::common::schedule::FrameSystems;
use crate::common::state::GameState;
use crate::plugins::guy::{CompositeSize, Guy};

pub mod map;

pub use map::{MapError, TileMap};

/// Physics world rectangle, equal to the map's pixel area.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds(pub Rect);

impl WorldBounds {
    /// Clamp a centre point so a footprint of `size` stays inside the bounds.
    pub fn clamp(&self, center: Vec2, size: Vec2) -> Vec2 {
        let half = (size * 0.5).min(self.0.half_size());
        center.clamp(self.0.min + half, self.0.max - half)
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct SolidTile {
    pub col: u32,
    pub row: u32,
    pub index: u32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::InGame),
        (load_map, (spawn_solid_tiles, spawn_bounds)).chain(),
    )
    .add_systems(Update, clamp_to_world_bounds.in_set(FrameSystems::Constrain));
}

/// Read the configured map unless one was provided up front.
pub fn load_map(
    mut commands: Commands,
    config: Res<GameConfig>,
    existing: Option<Res<TileMap>>,
) -> Result {
    if existing.is_some() {
        return Ok(());
    }

    let map = TileMap::load(&config.map_path)?;
    info!(
        "map {}: {}x{} tiles of {}x{}",
        config.map_path.display(),
        map.width,
        map.height,
        map.tile_width,
        map.tile_height,
    );
    commands.insert_resource(map);
    Ok(())
}

fn world_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::World, [Layer::Guy])
}

/// One static square collider per allow-listed tile of the collidable layer.
pub fn spawn_solid_tiles(
    mut commands: Commands,
    map: Res<TileMap>,
    policy: Res<CollisionPolicy>,
) -> Result {
    let layer = map.layer(&policy.layer)?;
    let tile = map.tile_size();

    let mut solid = 0usize;
    for (col, row, index) in layer
        .tiles()
        .filter(|&(col, row, _)| map.collides(&policy, col, row))
    {
        commands.spawn((
            Name::new(format!("SolidTile({col},{row})")),
            SolidTile { col, row, index },
            Transform::from_translation(map.tile_center(col, row).extend(1.0)),
            RigidBody::Static,
            Collider::rectangle(tile.x, tile.y),
            world_layers(),
            DespawnOnExit(GameState::InGame),
        ));
        solid += 1;
    }

    info!("{solid} solid tiles on layer {:?}", policy.layer);
    Ok(())
}

/// World bounds plus walls just outside them.
pub fn spawn_bounds(mut commands: Commands, map: Res<TileMap>) {
    let size = map.pixel_size();
    let rect = Rect::from_corners(Vec2::ZERO, size);
    commands.insert_resource(WorldBounds(rect));

    let thickness = map.tile_size().max_element();
    let center = rect.center();

    let mut spawn_wall = |name: &str, pos: Vec2, wall: Vec2| {
        commands.spawn((
            Name::new(name.to_owned()),
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(wall.x, wall.y),
            world_layers(),
            DespawnOnExit(GameState::InGame),
        ));
    };

    let horizontal = Vec2::new(size.x + thickness * 2.0, thickness);
    let vertical = Vec2::new(thickness, size.y);

    spawn_wall(
        "BoundTop",
        Vec2::new(center.x, rect.max.y + thickness * 0.5),
        horizontal,
    );
    spawn_wall(
        "BoundBottom",
        Vec2::new(center.x, rect.min.y - thickness * 0.5),
        horizontal,
    );
    spawn_wall(
        "BoundLeft",
        Vec2::new(rect.min.x - thickness * 0.5, center.y),
        vertical,
    );
    spawn_wall(
        "BoundRight",
        Vec2::new(rect.max.x + thickness * 0.5, center.y),
        vertical,
    );
}

/// Keep the composite's footprint inside the world rectangle.
pub fn clamp_to_world_bounds(
    bounds: Option<Res<WorldBounds>>,
    mut q_guy: Query<(&mut Transform, &CompositeSize), With<Guy>>,
) {
    let Some(bounds) = bounds else { return; };

    for (mut tf, size) in &mut q_guy {
        let pos = tf.translation.truncate();
        let clamped = bounds.clamp(pos, size.0);
        if clamped != pos {
            tf.translation.x = clamped.x;
            tf.translation.y = clamped.y;
        }
    }
}
