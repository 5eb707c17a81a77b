//! ECS components for entities.
//!
//! This module groups the component types that can be attached to entities in
//! the game world.
//!
//! Submodules overview:
//! - [`coin`] – playback state and pickup flag for a collectible coin
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`sprite`] – 2D sprite rendering component and frame rectangle

pub mod coin;
pub mod mapposition;
pub mod sprite;
