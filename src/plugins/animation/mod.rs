//! Frame-cycle animation with a pointer gate.
//!
//! A `FrameCycle` steps a sprite's atlas index through an inclusive frame range at a
//! fixed rate. The gate is a two-state machine:
//!
//! ```text
//!            PointerEdge::Pressed
//!   Paused ------------------------> Playing
//!          <------------------------
//!            PointerEdge::Released
//! ```
//!
//! Cycles marked `PointerGated` follow the global pointer, not the entity they animate:
//! a body keeps cycling while the button is held even if it is blocked by a wall or
//! sitting inside the dead zone.

use std::ops::RangeInclusive;
use std::time::Duration;

use bevy::prelude::*;

use crate::common::schedule::FrameSystems;
use crate::plugins::input::PointerEdge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Forever,
    /// Play the range this many times, then hold the last frame.
    Times(u32),
}

#[derive(Component, Debug, Clone)]
pub struct FrameCycle {
    pub key: &'static str,
    first: usize,
    last: usize,
    repeat: Repeat,
    loops_done: u32,
    frame: usize,
    timer: Timer,
    state: GateState,
}

/// Marker: the cycle resumes on pointer press and pauses on release.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PointerGated;

impl FrameCycle {
    /// A looping cycle, already playing from its first frame.
    pub fn new(key: &'static str, frames: RangeInclusive<usize>, fps: f32) -> Self {
        let (first, last) = frames.into_inner();
        debug_assert!(first <= last);
        Self {
            key,
            first,
            last,
            repeat: Repeat::Forever,
            loops_done: 0,
            frame: first,
            timer: Timer::new(
                Duration::from_secs_f64(1.0 / f64::from(fps.max(f32::EPSILON))),
                TimerMode::Repeating,
            ),
            state: GateState::Playing,
        }
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn frames(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }

    /// Returns `true` if this changed the state.
    pub fn pause(&mut self) -> bool {
        let changed = self.state != GateState::Paused;
        self.state = GateState::Paused;
        changed
    }

    /// Returns `true` if this changed the state. Resuming keeps the current frame.
    pub fn resume(&mut self) -> bool {
        let changed = self.state != GateState::Playing;
        self.state = GateState::Playing;
        changed
    }

    fn finished(&self) -> bool {
        matches!(self.repeat, Repeat::Times(n) if self.loops_done >= n)
    }

    /// Advance by `delta`; returns the new frame if it changed.
    pub fn tick(&mut self, delta: Duration) -> Option<usize> {
        if self.state == GateState::Paused || self.finished() {
            return None;
        }

        self.timer.tick(delta);
        let steps = self.timer.times_finished_this_tick();
        if steps == 0 {
            return None;
        }

        let before = self.frame;
        for _ in 0..steps {
            if self.frame < self.last {
                self.frame += 1;
                continue;
            }
            self.loops_done = self.loops_done.saturating_add(1);
            if self.finished() {
                break;
            }
            self.frame = self.first;
        }

        (self.frame != before).then_some(self.frame)
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (gate_on_pointer_edges, advance_frame_cycles)
            .chain()
            .in_set(FrameSystems::Present),
    );
}

pub fn gate_on_pointer_edges(
    mut edges: MessageReader<PointerEdge>,
    mut q_cycles: Query<&mut FrameCycle, With<PointerGated>>,
) {
    for edge in edges.read() {
        for mut cycle in &mut q_cycles {
            let changed = match edge {
                PointerEdge::Pressed => cycle.resume(),
                PointerEdge::Released => cycle.pause(),
            };
            if changed {
                debug!("cycle {:?} -> {:?}", cycle.key, cycle.state());
            }
        }
    }
}

pub fn advance_frame_cycles(time: Res<Time>, mut q_cycles: Query<(&mut FrameCycle, &mut Sprite)>) {
    for (mut cycle, mut sprite) in &mut q_cycles {
        let Some(frame) = cycle.tick(time.delta()) else {
            continue;
        };
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = frame;
        }
    }
}
