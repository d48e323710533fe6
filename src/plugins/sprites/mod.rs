//! Sprite assets and tile visuals (render-only).
//!
//! `SpriteAssets` is always present so gameplay can spawn sprites in headless apps; there
//! it holds default handles. With the render stack installed, `load_sprite_assets`
//! replaces them with the real sheet and atlas layout before anything is spawned.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::config::SpriteSheetSpec;
use crate::common::state::GameState;
use crate::plugins::world::{self, TileMap};

#[derive(Resource, Debug, Clone, Default)]
pub struct SpriteAssets {
    pub sheet: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
}

impl SpriteAssets {
    /// A sprite showing one cell of the sheet.
    pub fn sheet_sprite(&self, index: usize) -> Sprite {
        Sprite::from_atlas_image(
            self.sheet.clone(),
            TextureAtlas {
                layout: self.layout.clone(),
                index,
            },
        )
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct TileSprite;

pub fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::InGame),
        (
            load_sprite_assets.before(crate::plugins::guy::spawn),
            spawn_tile_sprites.after(world::load_map),
        ),
    );
}

fn grid_layout(cell: UVec2, columns: u32, rows: u32, spacing: UVec2, margin: u32) -> TextureAtlasLayout {
    let offset = (margin > 0).then(|| UVec2::splat(margin));
    TextureAtlasLayout::from_grid(cell, columns, rows, Some(spacing), offset)
}

pub fn load_sprite_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    sheet: Res<SpriteSheetSpec>,
) {
    let layout = grid_layout(sheet.cell, sheet.columns, sheet.rows, sheet.spacing, 0);
    commands.insert_resource(SpriteAssets {
        sheet: asset_server.load(sheet.path.clone()),
        layout: layouts.add(layout),
    });
}

/// Both map layers from the shared tileset, in layer order.
pub fn spawn_tile_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    map: Res<TileMap>,
) -> Result {
    let tileset = map.tileset()?;
    let image_file = tileset
        .image_file()
        .ok_or_else(|| format!("tileset {:?} has no image", tileset.name))?;

    let image: Handle<Image> = asset_server.load(format!("sprites/{image_file}"));
    let layout = layouts.add(grid_layout(
        UVec2::new(tileset.tile_width, tileset.tile_height),
        tileset.columns,
        tileset.rows(),
        UVec2::splat(tileset.spacing),
        tileset.margin,
    ));

    for (depth, layer) in map.tile_layers().filter(|l| l.visible).enumerate() {
        for (col, row, index) in layer.tiles() {
            let Some(cell) = tileset.atlas_index(index) else {
                warn!("tile {index} at ({col},{row}) is outside tileset {:?}", tileset.name);
                continue;
            };

            let mut sprite = Sprite::from_atlas_image(
                image.clone(),
                TextureAtlas {
                    layout: layout.clone(),
                    index: cell,
                },
            );
            sprite.color = Color::WHITE.with_alpha(layer.opacity);

            commands.spawn((
                TileSprite,
                sprite,
                Transform::from_translation(map.tile_center(col, row).extend(depth as f32)),
                DespawnOnExit(GameState::InGame),
            ));
        }
    }

    Ok(())
}
