use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Source rectangle inside a sheet texture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl FrameRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Sprite is identified by a texture key, its size in world units and the
/// currently displayed frame rectangle if the texture is a spritesheet.
/// For animated coins the frame rectangle is owned by the animation step;
/// nothing else should write it.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub frame: FrameRect,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            frame: FrameRect::new(0.0, 0.0, width, height),
        }
    }
}
