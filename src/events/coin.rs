//! Coin pickup events.
//!
//! Picking a coin up does not remove it immediately: the pickup only flips
//! the coin's `collected` flag, and the batched animation step plays the
//! remaining frames before despawning the entity and clearing its registry
//! slot.
//!
//! # Event Flow
//!
//! 1. Gameplay code triggers [`CoinPickupEvent`] for the touched entity
//! 2. [`coin_pickup_observer`] marks the coin as collected
//! 3. [`animate_coins`](crate::systems::coins::animate_coins) finishes the
//!    animation and removes the coin

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::coin::Coin;

/// Event fired when the player picks up a coin.
///
/// Carries the entity of the touched coin. Triggering it for an entity that
/// is not a coin, or for a coin already collected, has no effect.
#[derive(Event, Debug, Clone, Copy)]
pub struct CoinPickupEvent {
    pub entity: Entity,
}

/// Global observer that starts a coin's pickup animation.
///
/// Sets `collected` on the coin; the animation step takes it from there.
/// Idempotent, and silently ignores entities without a [`Coin`] component.
pub fn coin_pickup_observer(trigger: On<CoinPickupEvent>, mut coins: Query<&mut Coin>) {
    let entity = trigger.event().entity;
    let Ok(mut coin) = coins.get_mut(entity) else {
        return;
    };
    if !coin.collected {
        coin.collected = true;
        log::debug!("Coin {} collected", coin.token_index);
    }
}
