use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::plugins::guy::Guy;

use super::{follow_step, MainCamera};

#[test]
fn snap_lerp_lands_on_target() {
    let to = Vec2::new(120.0, -40.0);
    assert_eq!(follow_step(Vec2::ZERO, to, 1.0), to);
}

#[test]
fn partial_lerp_covers_fraction_of_gap() {
    let next = follow_step(Vec2::ZERO, Vec2::new(100.0, 50.0), 0.25);
    assert_eq!(next, Vec2::new(25.0, 12.5));
}

#[test]
fn camera_follows_guy_keeping_depth() {
    let mut world = World::new();
    world.spawn((Guy, Transform::from_xyz(150.0, 90.0, 100.0)));
    let cam = world
        .spawn((MainCamera { lerp: 1.0 }, Transform::from_xyz(0.0, 0.0, 999.0)))
        .id();

    run_system_once(&mut world, super::follow_guy);

    let tf = world.get::<Transform>(cam).unwrap();
    assert_eq!(tf.translation, Vec3::new(150.0, 90.0, 999.0));
}
