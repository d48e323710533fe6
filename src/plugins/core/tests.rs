use bevy::prelude::*;
use bevy::ui::UiScale;
use crate::common::config::{CollisionPolicy, GameConfig, SpriteSheetSpec};
use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
    assert!(app.world().get_resource::<SpriteSheetSpec>().is_some());
    assert!(app.world().get_resource::<CollisionPolicy>().is_some());
}

#[test]
fn clear_colour_follows_config() {
    let mut app = App::new();
    let background = Color::srgb(0.1, 0.2, 0.3);
    app.insert_resource(GameConfig { background, ..default() });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<ClearColor>().0, background);
}

#[test]
fn default_window_is_zoomed_viewport() {
    let config = GameConfig::default();
    assert_eq!(config.window_size(), UVec2::new(1080, 600));
}

#[test]
fn sprite_sheet_frames_are_sparse_keys() {
    let spec = SpriteSheetSpec::default();
    assert_eq!(spec.frame("body"), Some(241));
    assert_eq!(spec.frame("gun"), Some(97));
    assert_eq!(spec.frame("missing"), None);
}

#[test]
fn ui_scale_follows_zoom() {
    let mut app = App::new();
    app.insert_resource(GameConfig { zoom: 2.0, ..default() });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<UiScale>().0, 2.0);
}

#[test]
fn full_health_bar_spans_same_viewport_share_as_world_units() {
    let mut app = App::new();
    core::plugin(&mut app);

    let config = GameConfig::default();
    let scale = app.world().resource::<UiScale>().0;
    let bar_px = Tunables::default().bar_full_width * scale;
    let window_px = config.window_size().x as f32;

    // 100 units of a 360-unit viewport, whatever the zoom.
    assert!((bar_px / window_px - 100.0 / 360.0).abs() < 1e-6);
    assert_eq!(config.viewport.x, 360);
}

#[test]
fn collision_policy_allow_list() {
    let policy = CollisionPolicy::default();
    assert!(policy.is_solid(49));
    assert!(policy.is_solid(101));
    assert!(!policy.is_solid(48));
    assert!(!policy.is_solid(0));
}
