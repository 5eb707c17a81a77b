//! Sprite sheet registry.
//!
//! This module provides a minimal store for sprite sheet definitions that can
//! be reused by multiple entities. Systems look up a sheet by a string key
//! and drive playback based on the immutable frame list stored here.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::sprite::FrameRect;

/// Central registry of reusable sprite sheet definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct SheetStore {
    pub sheets: FxHashMap<String, SheetResource>,
}

/// Immutable data describing one sprite sheet animation strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetResource {
    /// Texture key resolved by the rendering layer.
    pub tex_key: String,
    /// Ordered frame rectangles; the coin's `frame` indexes into this.
    pub frames: Vec<FrameRect>,
}

impl SheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, sheet: SheetResource) {
        self.sheets.insert(key.into(), sheet);
    }

    pub fn get(&self, key: &str) -> Option<&SheetResource> {
        self.sheets.get(key)
    }

    /// Load sheet definitions from a JSON file mapping keys to sheets.
    ///
    /// Returns an error if the file cannot be read or parsed. Loaded entries
    /// are merged over any already present, replacing same-keyed sheets.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, String> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read sheet file {}: {}", path.display(), e))?;
        let sheets: FxHashMap<String, SheetResource> = serde_json::from_str(&data)
            .map_err(|e| format!("Failed to parse sheet file {}: {}", path.display(), e))?;
        let count = sheets.len();
        self.sheets.extend(sheets);
        log::info!("Loaded {} sheet(s) from {}", count, path.display());
        Ok(count)
    }
}
