//! Event types and observers.
//!
//! Events provide a decoupled way for gameplay code to communicate with the
//! animation systems without direct dependencies.
//!
//! Submodules:
//! - [`coin`] – pickup notifications that start a coin's removal animation
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod coin;
