//! Tiled JSON map data.
//!
//! Only the subset the game consumes is modelled: orthogonal tile layers stored as plain
//! CSV arrays and grid-based tilesets. Anything else is rejected at load time.
//!
//! Tiled rows run top to bottom; the world is Y-up with the map's bottom-left corner at
//! the origin, so row 0 is the highest row of tiles.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::common::config::CollisionPolicy;

/// Tiled stores flip/rotation flags in the top four bits of a GID.
const GID_MASK: u32 = 0x0FFF_FFFF;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse map {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("map has no layer named {0:?}")]
    MissingLayer(String),
    #[error("map has no tileset")]
    MissingTileset,
    #[error("layer {layer:?} holds {actual} tiles, expected {expected}")]
    LayerSizeMismatch {
        layer: String,
        expected: usize,
        actual: usize,
    },
    #[error("layer {0:?} uses an encoded data block; export the map with CSV layer data")]
    UnsupportedLayerEncoding(String),
}

#[derive(Resource, Debug, Clone, Deserialize)]
pub struct TileMap {
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(rename = "tileheight")]
    pub tile_height: u32,
    pub layers: Vec<TileLayer>,
    #[serde(default)]
    pub tilesets: Vec<Tileset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TileLayer {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub data: Option<LayerData>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LayerData {
    Csv(Vec<u32>),
    Encoded(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tileset {
    #[serde(rename = "firstgid")]
    pub first_gid: u32,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub columns: u32,
    #[serde(rename = "tilecount")]
    pub tile_count: u32,
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(rename = "tileheight")]
    pub tile_height: u32,
    #[serde(default)]
    pub spacing: u32,
    #[serde(default)]
    pub margin: u32,
}

fn default_visible() -> bool {
    true
}

fn default_opacity() -> f32 {
    1.0
}

impl TileMap {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Parse and validate; `origin` only labels errors.
    pub fn from_json(origin: impl AsRef<Path>, json: &str) -> Result<Self, MapError> {
        let map: TileMap = serde_json::from_str(json).map_err(|source| MapError::Parse {
            path: origin.as_ref().to_path_buf(),
            source,
        })?;
        map.validate()?;
        Ok(map)
    }

    fn validate(&self) -> Result<(), MapError> {
        let expected = (self.width * self.height) as usize;
        for layer in self.tile_layers() {
            let actual = (layer.width * layer.height) as usize;
            if (layer.width, layer.height) != (self.width, self.height) {
                return Err(MapError::LayerSizeMismatch {
                    layer: layer.name.clone(),
                    expected,
                    actual,
                });
            }
            match &layer.data {
                Some(LayerData::Csv(data)) if data.len() != expected => {
                    return Err(MapError::LayerSizeMismatch {
                        layer: layer.name.clone(),
                        expected,
                        actual: data.len(),
                    });
                }
                Some(LayerData::Encoded(_)) => {
                    return Err(MapError::UnsupportedLayerEncoding(layer.name.clone()));
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn tile_layers(&self) -> impl Iterator<Item = &TileLayer> {
        self.layers.iter().filter(|l| l.kind == "tilelayer")
    }

    pub fn layer(&self, name: &str) -> Result<&TileLayer, MapError> {
        self.tile_layers()
            .find(|l| l.name == name)
            .ok_or_else(|| MapError::MissingLayer(name.to_owned()))
    }

    /// The single tileset shared by every layer.
    pub fn tileset(&self) -> Result<&Tileset, MapError> {
        self.tilesets.first().ok_or(MapError::MissingTileset)
    }

    pub fn tile_size(&self) -> Vec2 {
        Vec2::new(self.tile_width as f32, self.tile_height as f32)
    }

    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            (self.width * self.tile_width) as f32,
            (self.height * self.tile_height) as f32,
        )
    }

    /// World-space centre of the cell at (col, row).
    pub fn tile_center(&self, col: u32, row: u32) -> Vec2 {
        let tile = self.tile_size();
        Vec2::new(
            col as f32 * tile.x + tile.x * 0.5,
            (self.height - row - 1) as f32 * tile.y + tile.y * 0.5,
        )
    }

    /// Convert a point measured from the map's top-left corner, y down, into world space.
    pub fn from_top_left(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x, self.pixel_size().y - point.y)
    }

    /// Whether the cell at (col, row) holds a solid tile under `policy`.
    ///
    /// A missing collision layer means nothing collides.
    pub fn collides(&self, policy: &CollisionPolicy, col: u32, row: u32) -> bool {
        self.layer(&policy.layer)
            .is_ok_and(|layer| policy.is_solid(layer.index_at(col, row)))
    }
}

impl TileLayer {
    fn csv(&self) -> &[u32] {
        match &self.data {
            Some(LayerData::Csv(data)) => data,
            _ => &[],
        }
    }

    /// Tile index at (col, row) with flip flags removed; 0 means empty.
    pub fn index_at(&self, col: u32, row: u32) -> u32 {
        if col >= self.width || row >= self.height {
            return 0;
        }
        self.csv()
            .get((row * self.width + col) as usize)
            .map_or(0, |gid| gid & GID_MASK)
    }

    /// Non-empty cells as (col, row, index).
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        let width = self.width.max(1);
        self.csv().iter().enumerate().filter_map(move |(i, gid)| {
            let index = gid & GID_MASK;
            (index != 0).then(|| (i as u32 % width, i as u32 / width, index))
        })
    }
}

impl Tileset {
    pub fn rows(&self) -> u32 {
        self.tile_count.div_ceil(self.columns.max(1))
    }

    /// Atlas cell for a map tile index, if it belongs to this tileset.
    pub fn atlas_index(&self, index: u32) -> Option<usize> {
        let local = index.checked_sub(self.first_gid)?;
        (local < self.tile_count).then_some(local as usize)
    }

    /// File name of the tileset image, without whatever directory Tiled recorded.
    pub fn image_file(&self) -> Option<&str> {
        let image = self.image.as_deref()?;
        Path::new(image).file_name()?.to_str()
    }
}
