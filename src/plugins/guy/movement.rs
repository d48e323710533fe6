//! Pointer-driven movement.
//!
//! While the pointer is held the composite heads straight for it at a fixed speed.
//! Inside the dead zone it stays put: without it, a composite sitting on the pointer
//! overshoots every step and jitters around the target.
//!
//! Collision response and bounds are left to the physics world; this system only
//! writes velocity. Each frame spent moving costs a little health, published as a
//! `ChangeHp` message so the health model never hears about movement directly.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::health::ChangeHp;
use crate::plugins::input::PointerState;

use super::Guy;
use super::aim::angle_between;

/// Velocity toward `target`, or `None` inside the dead zone.
pub fn steering_velocity(from: Vec2, target: Vec2, speed: f32, dead_zone: f32) -> Option<Vec2> {
    if from.distance(target) <= dead_zone {
        return None;
    }
    let angle = angle_between(from, target);
    Some(Vec2::new(speed * angle.cos(), speed * angle.sin()))
}

pub fn steer_towards_pointer(
    tunables: Res<Tunables>,
    pointer: Res<PointerState>,
    mut q_guy: Query<(&Transform, &mut LinearVelocity), With<Guy>>,
    mut hp: MessageWriter<ChangeHp>,
) {
    for (tf, mut vel) in &mut q_guy {
        vel.0 = Vec2::ZERO;

        if !pointer.is_down {
            continue;
        }

        let Some(v) = steering_velocity(
            tf.translation.truncate(),
            pointer.world,
            tunables.guy_speed,
            tunables.dead_zone,
        ) else {
            continue;
        };

        vel.0 = v;
        hp.write(ChangeHp::new(tunables.move_hp_cost));
    }
}
