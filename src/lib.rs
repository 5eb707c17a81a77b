//! Coinbatch library.
//!
//! Batched sprite animation for collectible coins: one centralized update
//! advances every coin in the scene instead of one update per object. This
//! module exposes the ECS components, resources, systems, and events for use
//! in integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
