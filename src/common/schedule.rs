//! Per-frame ordering.
//!
//! Every frame runs one pass of the simulation inside `Update`:
//!
//! ```text
//! Input      refresh pointer snapshot (screen -> world through current camera)
//! Constrain  clamp the composite inside the world bounds after physics moved it
//! Steer      aim the gun, then set the composite velocity
//! Health     apply ChangeHp messages written by Steer this frame
//! Present    sync derived visuals (bar width, animation frames, camera)
//! ```
//!
//! The pointer refresh must run before any angle or distance computation,
//! otherwise the world position lags one frame behind the camera.

use bevy::prelude::*;

use crate::common::state::GameState;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSystems {
    Input,
    Constrain,
    Steer,
    Health,
    Present,
}

pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            FrameSystems::Input,
            FrameSystems::Constrain,
            FrameSystems::Steer,
            FrameSystems::Health,
            FrameSystems::Present,
        )
            .chain()
            .run_if(in_state(GameState::InGame)),
    );
}
