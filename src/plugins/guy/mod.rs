//! Guy plugin: the controllable body + gun composite.
//!
//! Pipeline (per frame, `FrameSystems::Steer`):
//! - aim: rotate the gun toward the pointer
//! - move: set composite velocity toward the pointer while it is held
//!
//! Physics integrates the velocity in the fixed step and resolves tile collisions.

use bevy::prelude::*;

use crate::common::config::SpriteSheetSpec;
use crate::common::schedule::FrameSystems;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::animation::{FrameCycle, PointerGated};
use crate::plugins::sprites::SpriteAssets;
use crate::plugins::world::{self, TileMap};

pub mod aim;
pub mod composite;
pub mod movement;

use composite::{BodyPart, CompositeBuilder, GunPart};

/// The composite root; owns the physics body.
#[derive(Component)]
pub struct Guy;

/// Body sprite child.
#[derive(Component)]
pub struct GuyBody;

/// Physics footprint, set before the collider is attached.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CompositeSize(pub Vec2);

/// Key of the body's walk cycle.
pub const WALK_CYCLE: &str = "walk";

pub fn plugin(app: &mut App) {
    app.init_resource::<SpriteAssets>()
        .add_systems(OnEnter(GameState::InGame), spawn.after(world::load_map))
        .add_systems(
            Update,
            (aim::aim_gun, movement::steer_towards_pointer)
                .chain()
                .in_set(FrameSystems::Steer),
        );
}

pub fn spawn(
    mut commands: Commands,
    tunables: Res<Tunables>,
    sheet: Res<SpriteSheetSpec>,
    sprites: Res<SpriteAssets>,
    map: Res<TileMap>,
) -> Result {
    let body_frame = sheet.frame("body").ok_or("sprite sheet has no body frame")?;
    let gun_frame = sheet.frame("gun").ok_or("sprite sheet has no gun frame")?;
    let body_size = sheet.cell.as_vec2();
    debug!("body and gun cells are {body_size}");

    let body = BodyPart {
        frame: body_frame,
        size: body_size,
    };
    let gun = GunPart {
        frame: gun_frame,
        offset: Vec2::ZERO,
        tint: Color::srgb(0.0, 1.0, 0.0),
        origin: Vec2::new(0.33, 0.5),
    };

    let composite = CompositeBuilder::new(map.from_top_left(tunables.spawn_position), body, gun)
        .depth(tunables.composite_depth)
        .sized(tunables.composite_margin);
    info!("guy size {}", composite.size());

    let parts = composite.spawn(&mut commands, &sprites);

    // Starts playing, then pauses before the first frame is drawn.
    let mut walk = FrameCycle::new(WALK_CYCLE, sheet.walk.clone(), tunables.animation_fps);
    walk.pause();
    commands.entity(parts.body).insert((walk, PointerGated));

    Ok(())
}
