//! Scene-loading layer for coin scenes.
//!
//! Owns everything the animator deliberately does not: reading coin layouts
//! from disk, spawning coin entities, and handing the spawned set to the
//! registry via [`register_coins`](crate::systems::coins::register_coins).
//! The animator never queries the world on its own behalf; this layer is the
//! one that enumerates the scene and kicks registration off.

use std::path::Path;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::coin::Coin;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::sheetstore::SheetStore;
use crate::systems::coins::register_coins;

/// One coin placement in a layout file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoinSpawn {
    pub x: f32,
    pub y: f32,
}

/// Coin layout loaded from a JSON file: which sheet the coins animate with
/// and where they sit in the map.
///
/// ```json
/// {
///   "sheet": "coin",
///   "coins": [ { "x": 32.0, "y": 64.0 }, { "x": 48.0, "y": 64.0 } ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinLayout {
    pub sheet: String,
    pub coins: Vec<CoinSpawn>,
}

/// Load a coin layout from a JSON file.
pub fn load_layout(path: impl AsRef<Path>) -> Result<CoinLayout, String> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read layout file {}: {}", path.display(), e))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse layout file {}: {}", path.display(), e))
}

/// Spawn one `(Coin, Sprite, MapPosition)` entity per layout placement.
///
/// The first sheet frame is displayed immediately so freshly spawned coins
/// are not drawn with a stale rectangle before the first animation step.
/// A layout referencing an unknown sheet key is an error.
pub fn spawn_coins(world: &mut World, layout: &CoinLayout) -> Result<Vec<Entity>, String> {
    let (tex_key, first_frame) = {
        let sheets = world.resource::<SheetStore>();
        let sheet = sheets
            .get(&layout.sheet)
            .ok_or_else(|| format!("Layout references unknown sheet {:?}", layout.sheet))?;
        (sheet.tex_key.clone(), sheet.frames.first().copied())
    };

    let mut spawned = Vec::with_capacity(layout.coins.len());
    for placement in &layout.coins {
        let mut sprite = Sprite::new(tex_key.clone(), 16.0, 16.0);
        if let Some(frame) = first_frame {
            sprite.width = frame.w;
            sprite.height = frame.h;
            sprite.frame = frame;
        }
        let entity = world
            .spawn((
                Coin::new(layout.sheet.clone()),
                sprite,
                MapPosition::new(placement.x, placement.y),
            ))
            .id();
        spawned.push(entity);
    }

    log::info!(
        "Spawned {} coin(s) with sheet {:?}",
        spawned.len(),
        layout.sheet
    );
    Ok(spawned)
}

/// Load a layout, spawn its coins, and register them with the animator.
/// This is the whole scene setup for the headless demo.
pub fn setup(world: &mut World, layout_path: impl AsRef<Path>) -> Result<usize, String> {
    let layout = load_layout(layout_path)?;
    let spawned = spawn_coins(world, &layout)?;
    register_coins(world);
    Ok(spawned.len())
}
