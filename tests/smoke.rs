mod common;

use bevy::prelude::*;
use topdown_guy::plugins::guy::{CompositeSize, Guy};
use topdown_guy::plugins::health::{Health, HealthBar};
use topdown_guy::plugins::world::{SolidTile, TileMap, WorldBounds};

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn setup_builds_map_guy_and_health_bar() {
    let mut app = common::app_in_game();

    let map = app.world().resource::<TileMap>();
    assert_eq!((map.width, map.height), (40, 25));

    let bounds = *app.world().resource::<WorldBounds>();
    assert_eq!(bounds.0, Rect::new(0.0, 0.0, 640.0, 400.0));

    let solid = app
        .world_mut()
        .query::<&SolidTile>()
        .iter(app.world())
        .count();
    assert!(solid > 0, "bundled map should have solid tiles");

    let (tf, size) = app
        .world_mut()
        .query_filtered::<(&Transform, &CompositeSize), With<Guy>>()
        .single(app.world())
        .expect("exactly one guy");
    // Spawn point (100, 100) is authored from the map's top-left.
    assert_eq!(tf.translation.truncate(), Vec2::new(100.0, 300.0));
    assert_eq!(size.0, Vec2::new(12.0, 12.0));

    let bar = app
        .world_mut()
        .query_filtered::<&Node, With<HealthBar>>()
        .single(app.world())
        .expect("one health bar");
    assert_eq!(bar.width, Val::Px(80.0));

    assert_eq!(*app.world().resource::<Health>(), Health::new(80.0, 100.0));
}

#[test]
fn idle_frames_leave_health_alone() {
    let mut app = common::app_in_game();

    for _ in 0..10 {
        app.update();
    }

    assert_eq!(app.world().resource::<Health>().current, 80.0);
}
