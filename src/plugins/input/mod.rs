//! Pointer input.
//!
//! `PointerState` is the per-frame pointer snapshot the simulation reads. It is refreshed
//! once at the start of every frame (`FrameSystems::Input`):
//!
//! - `screen` is the last known cursor position inside the window. It only changes when
//!   the cursor moves.
//! - `world` is recomputed from `screen` through the *current* camera every frame, even
//!   when the cursor did not move. A following camera moves the world under a still
//!   cursor, so caching the world point would aim and steer at a stale target.
//! - `is_down` mirrors the left mouse button.
//!
//! Press/release edges are published as `PointerEdge` messages for listeners that care
//! about transitions rather than the held state.

use bevy::prelude::*;

use crate::common::schedule::FrameSystems;
use crate::plugins::camera::MainCamera;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub screen: Vec2,
    pub world: Vec2,
    pub is_down: bool,
}

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEdge {
    Pressed,
    Released,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<PointerState>()
        .add_message::<PointerEdge>()
        .add_systems(
            Update,
            (refresh_pointer_buttons, refresh_pointer_world)
                .chain()
                .in_set(FrameSystems::Input),
        );
}

/// Held state + edges from the mouse button.
///
/// Headless apps have no `ButtonInput<MouseButton>`; the snapshot is then left alone so
/// tests can drive it directly.
pub fn refresh_pointer_buttons(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut pointer: ResMut<PointerState>,
    mut edges: MessageWriter<PointerEdge>,
) {
    let Some(buttons) = buttons else { return; };

    if buttons.just_pressed(MouseButton::Left) {
        edges.write(PointerEdge::Pressed);
    }
    if buttons.just_released(MouseButton::Left) {
        edges.write(PointerEdge::Released);
    }

    let is_down = buttons.pressed(MouseButton::Left);
    if pointer.is_down != is_down {
        pointer.is_down = is_down;
    }
}

/// Re-project the last screen position through the current camera.
pub fn refresh_pointer_world(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut pointer: ResMut<PointerState>,
) {
    let window = match windows.single() {
        Ok(w) => w,
        Err(e) => { debug!("No single Window: {e:?}"); return; }
    };

    if let Some(cursor) = window.cursor_position() {
        pointer.screen = cursor;
    }

    let (camera, camera_tf) = match q_camera.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single MainCamera: {e:?}"); return; }
    };

    match camera.viewport_to_world_2d(camera_tf, pointer.screen) {
        Ok(world) => pointer.world = world,
        Err(e) => debug!("viewport_to_world_2d failed: {e:?}"),
    }
}
