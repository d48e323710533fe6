use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

use super::{bar_width, ChangeHp, Health, HealthBar, HealthBarBackground};

fn width_px(node: &Node) -> f32 {
    match node.width {
        Val::Px(px) => px,
        other => panic!("expected pixel width, got {other:?}"),
    }
}

fn world_with_bar() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(Health::new(80.0, 100.0));
    world.init_resource::<Messages<ChangeHp>>();
    run_system_once(&mut world, super::spawn_health_bar);
    world
}

fn bar_node(world: &mut World) -> Node {
    world
        .query_filtered::<&Node, With<HealthBar>>()
        .single(world)
        .unwrap()
        .clone()
}

fn apply_and_sync(world: &mut World) {
    run_system_once(world, super::apply_hp_changes);
    run_system_once(world, super::sync_health_bar);
    world.resource_mut::<Messages<ChangeHp>>().clear();
}

#[test]
fn bar_width_is_fraction_of_full() {
    assert_eq!(bar_width(80.0, 100.0, 100.0), 80.0);
    assert_eq!(bar_width(50.0, 200.0, 100.0), 25.0);
    assert_eq!(bar_width(0.0, 100.0, 100.0), 0.0);
}

#[test]
fn spawns_bar_at_initial_health_over_larger_background() {
    let mut world = world_with_bar();

    let bar = bar_node(&mut world);
    assert_eq!(width_px(&bar), 80.0);
    assert_eq!(bar.height, Val::Px(10.0));
    assert_eq!(bar.left, Val::Px(10.0));
    assert_eq!(bar.top, Val::Px(10.0));
    assert_eq!(bar.position_type, PositionType::Absolute);

    let bg = world
        .query_filtered::<&Node, With<HealthBarBackground>>()
        .single(&world)
        .unwrap();
    assert_eq!(bg.width, Val::Px(104.0));
    assert_eq!(bg.height, Val::Px(14.0));
    assert_eq!(bg.left, Val::Px(8.0));
    assert_eq!(bg.top, Val::Px(8.0));
}

#[test]
fn single_decay_event() {
    // max 100, current 80, one -0.1 delta.
    let mut world = world_with_bar();
    world.write_message(ChangeHp::new(-0.1));

    apply_and_sync(&mut world);

    let hp = *world.resource::<Health>();
    assert!((hp.current - 79.9).abs() < 1e-4);
    assert_eq!(hp.max, 100.0);

    let bar = bar_node(&mut world);
    assert!((width_px(&bar) - 79.9).abs() < 1e-4);
    assert_eq!(width_px(&bar), bar_width(hp.current, hp.max, 100.0));
    assert_eq!(bar.height, Val::Px(10.0));
}

#[test]
fn every_delta_in_a_frame_is_applied() {
    let mut world = world_with_bar();
    for amount in [-0.1, -0.1, 5.0, -2.0] {
        world.write_message(ChangeHp::new(amount));
    }

    apply_and_sync(&mut world);

    let hp = world.resource::<Health>().current;
    assert!((hp - 82.8).abs() < 1e-4);
    assert_eq!(width_px(&bar_node(&mut world)), bar_width(hp, 100.0, 100.0));
}

#[test]
fn bar_is_untouched_between_events() {
    let mut world = world_with_bar();
    let mut schedule = Schedule::default();
    schedule.add_systems((super::apply_hp_changes, super::sync_health_bar).chain());

    world.write_message(ChangeHp::new(-1.0));
    schedule.run(&mut world);
    assert!((width_px(&bar_node(&mut world)) - 79.0).abs() < 1e-4);

    // Nudge the node; with no event, sync must not rewrite it.
    world
        .query_filtered::<&mut Node, With<HealthBar>>()
        .single_mut(&mut world)
        .unwrap()
        .width = Val::Px(1.0);
    schedule.run(&mut world);

    assert_eq!(bar_node(&mut world).width, Val::Px(1.0));
    assert!((world.resource::<Health>().current - 79.0).abs() < 1e-4);
}

#[test]
fn health_is_not_clamped() {
    let mut hp = Health::new(0.05, 100.0);
    hp.apply(-0.1);
    assert!(hp.current < 0.0);
    hp.apply(500.0);
    assert!(hp.current > hp.max);
}

#[test]
fn plugin_starts_from_tunables() {
    let mut app = App::new();
    app.insert_resource(Tunables { initial_hp: 42.0, max_hp: 50.0, ..default() });
    super::plugin(&mut app);
    assert_eq!(*app.world().resource::<Health>(), Health::new(42.0, 50.0));
}
