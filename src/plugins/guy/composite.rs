//! Body + gun composite.
//!
//! The composite is one physics body that carries two sprite children. Its collider is
//! derived from the body sprite, shrunk by a fixed margin. A collider created without an
//! explicit size would fall back to a generic footprint, so the builder is split in two
//! states: `CompositeBuilder` has no physics at all, and only `SizedComposite` (obtained
//! through `sized`) can be spawned with a collider.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::plugins::sprites::SpriteAssets;

use super::aim::Gun;
use super::{CompositeSize, Guy, GuyBody};

#[derive(Debug, Clone, Copy)]
pub struct BodyPart {
    pub frame: usize,
    /// Sprite dimensions in world units.
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy)]
pub struct GunPart {
    pub frame: usize,
    /// Offset from the composite origin.
    pub offset: Vec2,
    pub tint: Color,
    /// Pivot in normalized sprite space, (0,0) top-left to (1,1) bottom-right.
    pub origin: Vec2,
}

impl GunPart {
    /// Bevy anchors are centred and Y-up.
    pub fn anchor(&self) -> Anchor {
        Anchor(Vec2::new(self.origin.x - 0.5, 0.5 - self.origin.y))
    }
}

#[derive(Debug, Clone)]
pub struct CompositeBuilder {
    position: Vec2,
    depth: f32,
    body: BodyPart,
    gun: GunPart,
}

#[derive(Debug, Clone)]
pub struct SizedComposite {
    parts: CompositeBuilder,
    size: Vec2,
}

/// Physics footprint for a body of the given size.
pub fn composite_size(body: Vec2, margin: f32) -> Vec2 {
    (body - Vec2::splat(margin)).max(Vec2::ZERO)
}

impl CompositeBuilder {
    pub fn new(position: Vec2, body: BodyPart, gun: GunPart) -> Self {
        Self {
            position,
            depth: 0.0,
            body,
            gun,
        }
    }

    /// Render depth; the composite draws above map layers.
    pub fn depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn sized(self, margin: f32) -> SizedComposite {
        let size = composite_size(self.body.size, margin);
        SizedComposite { parts: self, size }
    }
}

impl SizedComposite {
    pub fn size(&self) -> Vec2 {
        self.size
    }

    fn physics(size: Vec2) -> impl Bundle {
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            CollisionLayers::new(Layer::Guy, [Layer::World]),
            LockedAxes::ROTATION_LOCKED,
            Friction::ZERO,
            LinearVelocity::ZERO,
        )
    }

    /// Spawn the composite with its collider and both children.
    pub fn spawn(self, commands: &mut Commands, sprites: &SpriteAssets) -> CompositeEntities {
        let Self { parts, size } = self;
        let CompositeBuilder { position, depth, body, gun } = parts;

        let body = commands
            .spawn((
                Name::new("Body"),
                GuyBody,
                sprites.sheet_sprite(body.frame),
                Transform::default(),
            ))
            .id();

        let gun = commands
            .spawn((
                Name::new("Gun"),
                Gun::new(gun.offset),
                Sprite {
                    color: gun.tint,
                    ..sprites.sheet_sprite(gun.frame)
                },
                gun.anchor(),
                Transform::from_translation(gun.offset.extend(0.1)),
            ))
            .id();

        let root = commands
            .spawn((
                Name::new("Guy"),
                Guy,
                CompositeSize(size),
                Transform::from_translation(position.extend(depth)),
                Visibility::default(),
                Self::physics(size),
                DespawnOnExit(GameState::InGame),
            ))
            .add_children(&[body, gun])
            .id();

        CompositeEntities { root, body, gun }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeEntities {
    pub root: Entity,
    pub body: Entity,
    pub gun: Entity,
}
