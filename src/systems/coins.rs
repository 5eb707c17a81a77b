//! Batched coin animation.
//!
//! A single system advances the sprite animation of every coin in the scene,
//! so one update call animates hundreds of coins instead of each coin
//! ticking itself.
//!
//! # Flow
//!
//! 1. The scene layer spawns coin entities and calls [`register_coins`] once.
//! 2. Each tick, [`animate_coins`] checks the shared frame timer in
//!    [`CoinRegistry`](crate::resources::coinregistry::CoinRegistry).
//! 3. When `1 / frame_rate` seconds have passed, every live coin's displayed
//!    frame is set from its sheet and its frame index advances, wrapping for
//!    uncollected coins.
//! 4. A collected coin that has shown its last frame is despawned and its
//!    registry slot cleared for good.
//!
//! # Timing
//!
//! `next_frame_time` advances additively by `1 / frame_rate` per executed
//! step and is never snapped to the current time. When ticks are missed the
//! accumulator lags behind, and the step body fires on every following tick
//! until it has caught up; at most one step runs per tick.
//!
//! # Related
//!
//! - [`crate::components::coin::Coin`] – per-coin playback state
//! - [`crate::resources::sheetstore::SheetStore`] – frame definitions
//! - [`crate::events::coin::CoinPickupEvent`] – external pickup trigger

use bevy_ecs::prelude::*;

use crate::components::coin::Coin;
use crate::components::sprite::Sprite;
use crate::resources::coinregistry::CoinRegistry;
use crate::resources::sheetstore::SheetStore;
use crate::resources::worldtime::WorldTime;

/// Register all coin entities with the [`CoinRegistry`]. Call once after the
/// scene has spawned its coins.
///
/// If the registry's slot vector is empty, it is populated from a query over
/// every entity carrying a [`Coin`] component; the resulting order is
/// whatever the query yields and callers must not depend on it. A
/// pre-authored slot vector is left untouched.
///
/// Either way, each live coin's `token_index` is set to its slot position.
/// Finding zero coins is not an error; the animator simply has nothing to do.
pub fn register_coins(world: &mut World) {
    if world.resource::<CoinRegistry>().slots.is_empty() {
        let mut query = world.query_filtered::<Entity, With<Coin>>();
        let found: Vec<Entity> = query.iter(world).collect();
        let mut registry = world.resource_mut::<CoinRegistry>();
        registry.slots = found.into_iter().map(Some).collect();
    }

    let slots = world.resource::<CoinRegistry>().slots.clone();
    for (index, slot) in slots.iter().enumerate() {
        if let Some(entity) = *slot {
            if let Some(mut coin) = world.get_mut::<Coin>(entity) {
                coin.token_index = index;
            }
        }
    }

    log::info!("Registered {} coin(s)", slots.len());
}

/// Advance every registered coin by one animation frame when due.
///
/// Contract
/// - Reads [`WorldTime`] for the scaled elapsed time.
/// - Looks up frame data from [`SheetStore`].
/// - Mutates [`Coin`] frame state and the displayed [`Sprite`] frame.
/// - Despawns collected coins after their last frame and clears their slot.
///
/// Empty slots and entities that vanished from the world are expected
/// steady-state, not faults, and are skipped. A sheet with an empty frame
/// list is malformed configuration and panics at the index.
pub fn animate_coins(
    time: Res<WorldTime>,
    sheets: Res<SheetStore>,
    mut registry: ResMut<CoinRegistry>,
    mut query: Query<(&mut Coin, &mut Sprite)>,
    mut commands: Commands,
) {
    let frame_duration = 1.0 / registry.frame_rate;
    // if it's not yet time for the next frame, wait.
    if time.elapsed - registry.next_frame_time <= frame_duration {
        return;
    }

    for slot in registry.slots.iter_mut() {
        let Some(entity) = *slot else {
            // consumed earlier, no longer animated.
            continue;
        };
        let Ok((mut coin, mut sprite)) = query.get_mut(entity) else {
            // despawned behind our back; treat as already consumed.
            *slot = None;
            continue;
        };
        let Some(sheet) = sheets.get(&coin.sheet_key) else {
            log::warn!("Coin references unknown sheet {:?}", coin.sheet_key);
            continue;
        };

        sprite.frame = sheet.frames[coin.frame];
        if coin.collected && coin.frame == sheet.frames.len() - 1 {
            // last frame of the pickup animation has been shown; the coin
            // is gone for good.
            commands.entity(entity).try_despawn();
            *slot = None;
        } else {
            coin.frame = (coin.frame + 1) % sheet.frames.len();
        }
    }

    registry.next_frame_time += frame_duration;
}
