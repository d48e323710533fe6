//! Camera plugin (render-only).
//!
//! One orthographic camera, zoomed so the logical viewport fills the window, that keeps
//! the composite centred.
//!
//! `follow_guy` reads the guy's `Transform` and writes the camera's, so both queries carry
//! `Without<...>` filters to stay disjoint (B0001).
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera
//! Update/Present:  follow_guy (after Steer, so next frame's pointer refresh sees it)
//! ```

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::config::GameConfig;
use crate::common::schedule::FrameSystems;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::guy::Guy;
use crate::plugins::world::{self, TileMap};

#[derive(Component)]
pub struct MainCamera {
    /// Fraction of the remaining distance covered each frame; 1.0 snaps.
    pub lerp: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera.after(world::load_map))
        .add_systems(Update, follow_guy.in_set(FrameSystems::Present));
}

fn spawn_camera(
    mut commands: Commands,
    config: Res<GameConfig>,
    tunables: Res<Tunables>,
    map: Res<TileMap>,
) {
    let projection = OrthographicProjection {
        scale: 1.0 / config.zoom.max(f32::EPSILON),
        ..OrthographicProjection::default_2d()
    };

    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera { lerp: tunables.camera_lerp },
        Projection::Orthographic(projection),
        Transform::from_translation(map.from_top_left(tunables.spawn_position).extend(999.0)),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Move `from` toward `to` by `lerp` of the gap.
#[inline]
pub fn follow_step(from: Vec2, to: Vec2, lerp: f32) -> Vec2 {
    from + (to - from) * lerp.clamp(0.0, 1.0)
}

fn follow_guy(
    // Disjointness proof: the composite is not the camera.
    q_guy: Query<&Transform, (With<Guy>, Without<MainCamera>)>,
    // Disjointness proof: the camera is not the composite.
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Guy>>,
) {
    let Ok(tf_guy) = q_guy.single() else { return; };
    let Ok((mut tf_cam, cam)) = q_cam.single_mut() else { return; };

    let next = follow_step(tf_cam.translation.truncate(), tf_guy.translation.truncate(), cam.lerp);
    tf_cam.translation.x = next.x;
    tf_cam.translation.y = next.y;
}

#[cfg(test)]
mod tests;
