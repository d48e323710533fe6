//! Core plugin: shared resources and global settings.

use bevy::prelude::*;
use bevy::ui::UiScale;

use crate::common::config::{CollisionPolicy, GameConfig, SpriteSheetSpec};
use crate::common::schedule;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let (background, zoom) = app
        .world()
        .get_resource::<GameConfig>()
        .map(|config| (config.background, config.zoom))
        .unwrap_or_else(|| {
            let config = GameConfig::default();
            (config.background, config.zoom)
        });

    app.insert_resource(Tunables::default());
    app.init_resource::<SpriteSheetSpec>();
    app.init_resource::<CollisionPolicy>();
    app.insert_resource(ClearColor(background));
    // UI is laid out in viewport units, like the world under the zoomed camera.
    app.insert_resource(UiScale(zoom));
    schedule::plugin(app);
}

#[cfg(test)]
mod tests;
