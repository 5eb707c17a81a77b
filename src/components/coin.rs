//! Collectible coin component.
//!
//! A coin is a sprite-animated pickup. Its frame sequence lives in the
//! [`SheetStore`](crate::resources::sheetstore::SheetStore) under `sheet_key`;
//! the coin itself only carries playback state. All coins in a scene are
//! advanced together by the
//! [`animate_coins`](crate::systems::coins::animate_coins) system through the
//! [`CoinRegistry`](crate::resources::coinregistry::CoinRegistry), so a single
//! system call animates hundreds of coins.
//!
//! # Lifecycle
//!
//! - `collected = false`: the frame index cycles through the sheet forever.
//! - `collected = true` (set via
//!   [`CoinPickupEvent`](crate::events::coin::CoinPickupEvent)): playback
//!   continues to the sheet's last frame, then the entity is despawned and
//!   its registry slot is cleared for good.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Coin {
    /// Sheet key in [`crate::resources::sheetstore::SheetStore`].
    pub sheet_key: String,
    /// Current frame index into the sheet's frame list.
    pub frame: usize,
    /// Set externally when the player picks the coin up.
    pub collected: bool,
    /// Position of this coin in the registry's slot vector.
    pub token_index: usize,
}

impl Coin {
    pub fn new(sheet_key: impl Into<String>) -> Self {
        Self {
            sheet_key: sheet_key.into(),
            frame: 0,
            collected: false,
            token_index: 0,
        }
    }
}
