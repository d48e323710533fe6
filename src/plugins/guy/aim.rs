//! Gun aim.
//!
//! Every frame the gun snaps to face the pointer. The angle is measured from the gun's
//! world position (composite position + gun offset), so a gun mounted off-centre still
//! points exactly at the cursor. Nothing carries over from the previous frame.

use bevy::prelude::*;

use crate::plugins::input::PointerState;

use super::Guy;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Gun {
    pub offset: Vec2,
    /// Radians, (-π, π].
    pub angle: f32,
}

impl Gun {
    pub fn new(offset: Vec2) -> Self {
        Self { offset, angle: 0.0 }
    }
}

/// Angle of the ray from `from` to `to`.
#[inline]
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

pub fn aim_gun(
    pointer: Res<PointerState>,
    // Disjointness proof: the composite is not a gun.
    q_guy: Query<&Transform, (With<Guy>, Without<Gun>)>,
    // Disjointness proof: guns are not the composite.
    mut q_gun: Query<(&ChildOf, &mut Gun, &mut Transform), Without<Guy>>,
) {
    for (child_of, mut gun, mut tf) in &mut q_gun {
        let Ok(guy_tf) = q_guy.get(child_of.parent()) else {
            continue;
        };

        let gun_world = guy_tf.translation.truncate() + gun.offset;
        gun.angle = angle_between(gun_world, pointer.world);
        tf.rotation = Quat::from_rotation_z(gun.angle);
    }
}
