//! Startup configuration.
//!
//! `GameConfig` is built once (from the command line in `main.rs`) and handed to
//! `game::run`. It is inserted as a resource so setup systems can read it, but nothing
//! mutates it after startup.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use bevy::prelude::*;

pub const DEFAULT_MAP_PATH: &str = "assets/maps/test.json";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub title: String,
    /// Logical viewport size in world units (before zoom).
    pub viewport: UVec2,
    pub zoom: f32,
    pub gravity: Vec2,
    pub physics_debug: bool,
    pub background: Color,
    /// Nearest-neighbour sampling for sprite textures.
    pub pixel_art: bool,
    pub map_path: PathBuf,
    pub verbose: bool,
}

impl GameConfig {
    /// Window size in physical pixels.
    pub fn window_size(&self) -> UVec2 {
        (self.viewport.as_vec2() * self.zoom).round().as_uvec2()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Top-down Guy".into(),
            viewport: UVec2::new(360, 200),
            zoom: 3.0,
            gravity: Vec2::ZERO,
            physics_debug: true,
            background: Color::srgb_u8(0x47, 0x2d, 0x3c),
            pixel_art: true,
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            verbose: false,
        }
    }
}

/// A sprite sheet cut into fixed cells, with a sparse table of named frames.
#[derive(Resource, Debug, Clone)]
pub struct SpriteSheetSpec {
    pub path: String,
    pub cell: UVec2,
    pub spacing: UVec2,
    pub columns: u32,
    pub rows: u32,
    pub frames: Vec<(&'static str, usize)>,
    /// Body walk cycle, inclusive.
    pub walk: RangeInclusive<usize>,
}

impl SpriteSheetSpec {
    pub fn frame(&self, key: &str) -> Option<usize> {
        self.frames
            .iter()
            .find_map(|(k, index)| (*k == key).then_some(*index))
    }
}

impl Default for SpriteSheetSpec {
    fn default() -> Self {
        Self {
            path: "sprites/monochrome_tilemap_transparent.png".into(),
            cell: UVec2::splat(16),
            spacing: UVec2::splat(1),
            columns: 20,
            rows: 20,
            frames: vec![("body", 241), ("gun", 97)],
            walk: 241..=245,
        }
    }
}

/// Declares the solid tiles of the map.
///
/// Solid tiles become full static rectangles, so every face of them blocks movement.
#[derive(Resource, Debug, Clone)]
pub struct CollisionPolicy {
    pub layer: String,
    pub solid: Vec<u32>,
}

impl CollisionPolicy {
    pub fn is_solid(&self, index: u32) -> bool {
        self.solid.contains(&index)
    }
}

impl Default for CollisionPolicy {
    fn default() -> Self {
        Self {
            layer: "Tile Layer 2".into(),
            solid: vec![49, 50, 51, 52, 53, 54, 100, 101],
        }
    }
}
