//! Health model and on-screen bar.
//!
//! Health only changes through `ChangeHp` messages. Producers (movement today) write a
//! signed delta and know nothing about the bar; `apply_hp_changes` is the single writer
//! of `Health`, and it runs in the same frame the deltas were written (`FrameSystems::Health`
//! follows `FrameSystems::Steer`).
//!
//! The bar is derived state: its foreground width is recomputed whenever `Health`
//! changed, and the background frame is drawn once. Both are UI nodes, so they stay
//! pinned to the viewport while the camera follows the composite.
//!
//! The value is deliberately not clamped; see DESIGN.md.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::schedule::FrameSystems;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(current: f32, max: f32) -> Self {
        Self { current, max }
    }

    #[inline]
    pub fn apply(&mut self, delta: f32) {
        self.current += delta;
    }
}

/// Signed health delta.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ChangeHp {
    pub amount: f32,
}

impl ChangeHp {
    pub fn new(amount: f32) -> Self {
        Self { amount }
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct HealthBar {
    pub full_width: f32,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct HealthBarBackground;

#[inline]
pub fn bar_width(current: f32, max: f32, full_width: f32) -> f32 {
    (current / max) * full_width
}

pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>().clone();

    app.insert_resource(Health::new(tunables.initial_hp, tunables.max_hp))
        .add_message::<ChangeHp>()
        .add_systems(OnEnter(GameState::InGame), spawn_health_bar)
        .add_systems(Update, apply_hp_changes.in_set(FrameSystems::Health))
        .add_systems(Update, sync_health_bar.in_set(FrameSystems::Present));
}

fn spawn_health_bar(mut commands: Commands, tunables: Res<Tunables>, health: Res<Health>) {
    let offset = tunables.bar_offset;
    let margin = tunables.bar_margin;

    commands.spawn((
        Name::new("HealthBarBackground"),
        HealthBarBackground,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(offset.x - margin),
            top: Val::Px(offset.y - margin),
            width: Val::Px(tunables.bar_full_width + margin * 2.0),
            height: Val::Px(tunables.bar_height + margin * 2.0),
            ..default()
        },
        BackgroundColor(Color::srgb_u8(0x22, 0x22, 0x22)),
        DespawnOnExit(GameState::InGame),
    ));

    commands.spawn((
        Name::new("HealthBar"),
        HealthBar {
            full_width: tunables.bar_full_width,
        },
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(offset.x),
            top: Val::Px(offset.y),
            width: Val::Px(bar_width(health.current, health.max, tunables.bar_full_width)),
            height: Val::Px(tunables.bar_height),
            ..default()
        },
        BackgroundColor(Color::srgb_u8(0xff, 0x00, 0x00)),
        // Drawn over the background frame.
        ZIndex(1),
        DespawnOnExit(GameState::InGame),
    ));
}

pub fn apply_hp_changes(mut changes: MessageReader<ChangeHp>, mut health: ResMut<Health>) {
    for change in changes.read() {
        health.apply(change.amount);
    }
}

/// Foreground width follows health; height is left alone.
pub fn sync_health_bar(health: Res<Health>, mut q_bar: Query<(&HealthBar, &mut Node)>) {
    if !health.is_changed() {
        return;
    }
    for (bar, mut node) in &mut q_bar {
        node.width = Val::Px(bar_width(health.current, health.max, bar.full_width));
    }
}

#[cfg(test)]
mod tests;
