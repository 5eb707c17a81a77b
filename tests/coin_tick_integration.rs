//! Engine tick integration tests for coin registration, animation, and pickup.

use bevy_ecs::prelude::*;

use coinbatch::components::coin::Coin;
use coinbatch::components::sprite::{FrameRect, Sprite};
use coinbatch::events::coin::{CoinPickupEvent, coin_pickup_observer};
use coinbatch::resources::coinregistry::CoinRegistry;
use coinbatch::resources::sheetstore::{SheetResource, SheetStore};
use coinbatch::resources::worldtime::WorldTime;
use coinbatch::systems::coins::{animate_coins, register_coins};
use coinbatch::systems::time::update_world_time;

const FRAME_RATE: f32 = 12.0;
const FRAME_TIME: f32 = 1.0 / FRAME_RATE;
/// Delta that reliably lands past the strict `elapsed - next > 1/rate` check.
const STEP_DT: f32 = FRAME_TIME + 1e-3;
const SHEET_FRAMES: usize = 4;

fn frame_rect(index: usize) -> FrameRect {
    FrameRect::new(index as f32 * 16.0, 0.0, 16.0, 16.0)
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(CoinRegistry::new().with_frame_rate(FRAME_RATE));

    let mut sheets = SheetStore::new();
    sheets.insert(
        "coin",
        SheetResource {
            tex_key: "tokens".to_string(),
            frames: (0..SHEET_FRAMES).map(frame_rect).collect(),
        },
    );
    world.insert_resource(sheets);
    world
}

fn spawn_coin(world: &mut World) -> Entity {
    world
        .spawn((Coin::new("coin"), Sprite::new("tokens", 16.0, 16.0)))
        .id()
}

fn tick_animation(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(animate_coins);
    schedule.run(world);
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn registration_discovers_all_coins_with_unique_indices() {
    let mut world = make_world();
    let spawned = vec![
        spawn_coin(&mut world),
        spawn_coin(&mut world),
        spawn_coin(&mut world),
    ];

    register_coins(&mut world);

    let registry = world.resource::<CoinRegistry>().clone();
    assert_eq!(registry.len(), 3);
    assert_eq!(registry.live_count(), 3);

    // Every spawned coin ends up in exactly one slot, indexed by position.
    let mut found: Vec<Entity> = registry.live_coins().collect();
    found.sort();
    let mut expected = spawned.clone();
    expected.sort();
    assert_eq!(found, expected);

    for (index, slot) in registry.slots.iter().enumerate() {
        let coin = world.get::<Coin>(slot.unwrap()).unwrap();
        assert_eq!(coin.token_index, index);
    }
}

#[test]
fn registration_keeps_presupplied_slots_untouched() {
    let mut world = make_world();
    let a = spawn_coin(&mut world);
    let b = spawn_coin(&mut world);
    let c = spawn_coin(&mut world);

    // Authored set: only c and a, in that order. No discovery may run.
    world.insert_resource(
        CoinRegistry::new()
            .with_frame_rate(FRAME_RATE)
            .with_slots([c, a]),
    );

    register_coins(&mut world);

    let registry = world.resource::<CoinRegistry>();
    assert_eq!(registry.slots, vec![Some(c), Some(a)]);
    assert_eq!(world.get::<Coin>(c).unwrap().token_index, 0);
    assert_eq!(world.get::<Coin>(a).unwrap().token_index, 1);
    // b stayed out of the registry entirely.
    assert_eq!(world.get::<Coin>(b).unwrap().token_index, 0);
}

#[test]
fn registration_with_zero_coins_is_not_an_error() {
    let mut world = make_world();
    register_coins(&mut world);
    assert!(world.resource::<CoinRegistry>().is_empty());

    // Ticking an empty registry is a no-op.
    tick_animation(&mut world, STEP_DT);
}

// =============================================================================
// Looping animation
// =============================================================================

#[test]
fn uncollected_coin_cycles_through_all_frames_and_wraps() {
    let mut world = make_world();
    let entity = spawn_coin(&mut world);
    register_coins(&mut world);

    for step in 1..=(SHEET_FRAMES * 2 + 1) {
        tick_animation(&mut world, STEP_DT);
        let coin = world.get::<Coin>(entity).unwrap();
        assert_eq!(coin.frame, step % SHEET_FRAMES);
        assert!(coin.frame < SHEET_FRAMES);
    }
}

#[test]
fn step_displays_current_frame_before_advancing() {
    let mut world = make_world();
    let entity = spawn_coin(&mut world);
    register_coins(&mut world);

    tick_animation(&mut world, STEP_DT);

    let coin = world.get::<Coin>(entity).unwrap();
    let sprite = world.get::<Sprite>(entity).unwrap();
    assert_eq!(sprite.frame, frame_rect(0)); // shown this step
    assert_eq!(coin.frame, 1); // advanced for the next one
}

#[test]
fn coin_with_unknown_sheet_is_skipped() {
    let mut world = make_world();
    let entity = world
        .spawn((Coin::new("gem"), Sprite::new("tokens", 16.0, 16.0)))
        .id();
    register_coins(&mut world);

    tick_animation(&mut world, STEP_DT);

    let coin = world.get::<Coin>(entity).unwrap();
    assert_eq!(coin.frame, 0); // untouched, still registered
    assert_eq!(world.resource::<CoinRegistry>().live_count(), 1);
}

// =============================================================================
// Frame timing
// =============================================================================

#[test]
fn no_step_before_frame_time_has_elapsed() {
    let mut world = make_world();
    let entity = spawn_coin(&mut world);
    register_coins(&mut world);

    // Two half-frame advances reach exactly 1/12s; the check is strict.
    tick_animation(&mut world, FRAME_TIME * 0.5);
    tick_animation(&mut world, FRAME_TIME * 0.5);

    assert_eq!(world.get::<Coin>(entity).unwrap().frame, 0);
}

#[test]
fn exactly_one_step_per_frame_time() {
    let mut world = make_world();
    let entity = spawn_coin(&mut world);
    register_coins(&mut world);

    for expected in 1..=3 {
        tick_animation(&mut world, STEP_DT);
        assert_eq!(world.get::<Coin>(entity).unwrap().frame, expected);
    }
}

#[test]
fn large_delta_still_advances_a_single_frame_per_tick() {
    let mut world = make_world();
    let entity = spawn_coin(&mut world);
    register_coins(&mut world);

    // Half a second at once: many frame times missed, one step fires.
    tick_animation(&mut world, 0.5);
    assert_eq!(world.get::<Coin>(entity).unwrap().frame, 1);

    // The accumulator lags behind, so tiny follow-up ticks keep stepping
    // until it has caught up.
    tick_animation(&mut world, 1e-4);
    assert_eq!(world.get::<Coin>(entity).unwrap().frame, 2);
    tick_animation(&mut world, 1e-4);
    assert_eq!(world.get::<Coin>(entity).unwrap().frame, 3);
}

// =============================================================================
// Pickup and removal
// =============================================================================

#[test]
fn pickup_event_marks_coin_collected_once() {
    let mut world = make_world();
    let entity = spawn_coin(&mut world);
    register_coins(&mut world);

    world.add_observer(coin_pickup_observer);
    world.flush();

    assert!(!world.get::<Coin>(entity).unwrap().collected);
    world.trigger(CoinPickupEvent { entity });
    assert!(world.get::<Coin>(entity).unwrap().collected);

    // Idempotent, and harmless on entities that are not coins.
    world.trigger(CoinPickupEvent { entity });
    let bystander = world.spawn_empty().id();
    world.trigger(CoinPickupEvent { entity: bystander });
    assert!(world.get::<Coin>(entity).unwrap().collected);
}

#[test]
fn collected_coin_is_removed_only_after_its_last_frame() {
    let mut world = make_world();
    let entity = spawn_coin(&mut world);
    register_coins(&mut world);

    world.get_mut::<Coin>(entity).unwrap().collected = true;

    // Frames 0..2 still display and advance; the coin must survive them.
    for _ in 0..SHEET_FRAMES - 1 {
        tick_animation(&mut world, STEP_DT);
        assert!(world.get_entity(entity).is_ok());
    }
    assert_eq!(
        world.get::<Coin>(entity).unwrap().frame,
        SHEET_FRAMES - 1
    );

    // The step that displays the last frame removes the coin.
    tick_animation(&mut world, STEP_DT);
    assert!(world.get_entity(entity).is_err());
    assert_eq!(world.resource::<CoinRegistry>().slots, vec![None]);
}

#[test]
fn pickup_mid_loop_finishes_from_current_frame() {
    let mut world = make_world();
    let entity = spawn_coin(&mut world);
    register_coins(&mut world);

    world.add_observer(coin_pickup_observer);
    world.flush();

    // Let the loop run to frame 2 before the pickup.
    tick_animation(&mut world, STEP_DT);
    tick_animation(&mut world, STEP_DT);
    assert_eq!(world.get::<Coin>(entity).unwrap().frame, 2);

    world.trigger(CoinPickupEvent { entity });

    // Two frames remain (2 and 3); removal happens on the second.
    tick_animation(&mut world, STEP_DT);
    assert!(world.get_entity(entity).is_ok());
    tick_animation(&mut world, STEP_DT);
    assert!(world.get_entity(entity).is_err());
}

#[test]
fn cleared_slot_stays_empty_and_others_keep_animating() {
    let mut world = make_world();
    let doomed = spawn_coin(&mut world);
    let survivor = spawn_coin(&mut world);
    world.insert_resource(
        CoinRegistry::new()
            .with_frame_rate(FRAME_RATE)
            .with_slots([doomed, survivor]),
    );
    register_coins(&mut world);

    world.get_mut::<Coin>(doomed).unwrap().collected = true;
    for _ in 0..SHEET_FRAMES {
        tick_animation(&mut world, STEP_DT);
    }
    assert!(world.get_entity(doomed).is_err());
    assert_eq!(world.resource::<CoinRegistry>().slots[0], None);

    // Further steps never revive the slot and the survivor keeps looping.
    let before = world.get::<Coin>(survivor).unwrap().frame;
    tick_animation(&mut world, STEP_DT);
    assert_eq!(world.resource::<CoinRegistry>().slots[0], None);
    assert_eq!(
        world.get::<Coin>(survivor).unwrap().frame,
        (before + 1) % SHEET_FRAMES
    );
}

#[test]
fn externally_despawned_coin_is_treated_as_consumed() {
    let mut world = make_world();
    let vanished = spawn_coin(&mut world);
    let survivor = spawn_coin(&mut world);
    world.insert_resource(
        CoinRegistry::new()
            .with_frame_rate(FRAME_RATE)
            .with_slots([vanished, survivor]),
    );
    register_coins(&mut world);

    world.despawn(vanished);
    tick_animation(&mut world, STEP_DT);

    let registry = world.resource::<CoinRegistry>();
    assert_eq!(registry.slots[0], None);
    assert_eq!(registry.live_count(), 1);
    assert_eq!(world.get::<Coin>(survivor).unwrap().frame, 1);
}

// =============================================================================
// Time scaling
// =============================================================================

#[test]
fn time_scale_zero_freezes_animation() {
    let mut world = make_world();
    let entity = spawn_coin(&mut world);
    register_coins(&mut world);

    world.insert_resource(WorldTime::default().with_time_scale(0.0));

    for _ in 0..5 {
        tick_animation(&mut world, STEP_DT);
    }
    assert_eq!(world.get::<Coin>(entity).unwrap().frame, 0);
}
