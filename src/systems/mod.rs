//! Engine systems.
//!
//! This module groups the systems that advance the simulation.
//!
//! Submodules overview
//! - [`coins`] – register coins and advance their batched sprite animation
//! - [`time`] – update simulation time and delta

pub mod coins;
pub mod time;
