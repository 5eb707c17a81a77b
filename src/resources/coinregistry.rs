//! Central registry of animated coin entities.
//!
//! Holds the ordered slot vector the batched animation step walks every
//! frame, plus the shared frame timing state. Slots may be pre-authored by
//! the scene (tests, hand-built scenes) or filled once by
//! [`register_coins`](crate::systems::coins::register_coins); a slot becomes
//! `None` forever once its coin has played out its pickup animation.

use bevy_ecs::prelude::{Entity, Resource};

/// Default animation steps per second.
pub const DEFAULT_FRAME_RATE: f32 = 12.0;

#[derive(Resource, Debug, Clone)]
pub struct CoinRegistry {
    /// Ordered, index-addressable coin slots. Consumed coins leave a `None`
    /// hole; holes are never reused.
    pub slots: Vec<Option<Entity>>,
    /// Animation steps per second for every coin in the registry.
    pub frame_rate: f32,
    /// Additive accumulator for the next animation step, in seconds of
    /// world time. Advanced by `1 / frame_rate` per executed step, never
    /// snapped to the current time.
    pub next_frame_time: f32,
}

impl Default for CoinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinRegistry {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            frame_rate: DEFAULT_FRAME_RATE,
            next_frame_time: 0.0,
        }
    }

    pub fn with_frame_rate(mut self, frame_rate: f32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Pre-populate the slot vector with an authored coin list. Registration
    /// will keep this list untouched instead of running discovery.
    pub fn with_slots(mut self, coins: impl IntoIterator<Item = Entity>) -> Self {
        self.slots = coins.into_iter().map(Some).collect();
        self
    }

    /// Number of slots, consumed ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of coins not yet consumed.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Entities of the coins not yet consumed, in slot order.
    pub fn live_coins(&self) -> impl Iterator<Item = Entity> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }
}
