//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `coinregistry` – ordered coin slots and shared animation timing state
//! - `gameconfig` – tunables loaded from `config.ini`
//! - `sheetstore` – sprite sheet definitions keyed by string IDs
//! - `worldtime` – simulation time and delta

pub mod coinregistry;
pub mod gameconfig;
pub mod sheetstore;
pub mod worldtime;
