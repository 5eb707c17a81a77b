//! Coinbatch main entry point.
//!
//! A headless demo of batched coin sprite animation using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **clap** / **env_logger** / **configparser** for the usual plumbing
//!
//! This executable loads a sheet store and a coin layout from JSON, spawns
//! the coins, and runs a fixed-step loop. Once per simulated second it picks
//! a random surviving coin and triggers its pickup, so the full
//! loop → pickup → finishing animation → removal lifecycle can be watched in
//! the logs.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! RUST_LOG=debug cargo run -- --ticks 1200
//! ```

mod components;
mod events;
mod game;
mod resources;
mod systems;

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;

use crate::events::coin::{CoinPickupEvent, coin_pickup_observer};
use crate::resources::coinregistry::CoinRegistry;
use crate::resources::gameconfig::GameConfig;
use crate::resources::sheetstore::SheetStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::coins::animate_coins;
use crate::systems::time::update_world_time;

/// Batched coin sprite animation, headless demo.
#[derive(Parser)]
#[command(version, about = "Animates a scene full of coins with a single batched update")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Path to the sheet definitions JSON.
    #[arg(long, value_name = "PATH", default_value = "assets/sheets.json")]
    sheets: PathBuf,

    /// Path to the coin layout JSON.
    #[arg(long, value_name = "PATH", default_value = "assets/coins.json")]
    layout: PathBuf,

    /// Tick budget, overriding the config file.
    #[arg(long, value_name = "N")]
    ticks: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    config.load_from_file().ok(); // ignore errors, use defaults

    let tick_rate = config.tick_rate.max(1);
    let ticks = cli.ticks.unwrap_or(config.ticks);
    let dt = 1.0 / tick_rate as f32;

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(CoinRegistry::new().with_frame_rate(config.frame_rate));

    let mut sheets = SheetStore::new();
    if let Err(e) = sheets.load_from_file(&cli.sheets) {
        log::error!("{}", e);
        std::process::exit(1);
    }
    world.insert_resource(sheets);
    world.insert_resource(config);

    world.add_observer(coin_pickup_observer);
    // Ensure the observer is registered before anything can trigger pickups.
    world.flush();

    let total = match game::setup(&mut world, &cli.layout) {
        Ok(count) => count,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    if total == 0 {
        log::warn!("Layout contains no coins; nothing to animate");
    }

    let mut update = Schedule::default();
    update.add_systems(animate_coins);
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    let mut tick: u64 = 0;
    while tick < ticks {
        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers(); // Clear changed components for next frame

        // Once per simulated second, pick up one surviving coin.
        if tick % tick_rate as u64 == 0 {
            let live: Vec<Entity> = world.resource::<CoinRegistry>().live_coins().collect();
            if let Some(&entity) = live.get(fastrand::usize(0..live.len().max(1))) {
                world.trigger(CoinPickupEvent { entity });
                log::info!(
                    "Tick {}: picked up coin {:?} ({} remaining)",
                    tick,
                    entity,
                    live.len() - 1
                );
            }
        }

        if world.resource::<CoinRegistry>().live_count() == 0 {
            break;
        }
        tick += 1;
    }

    let registry = world.resource::<CoinRegistry>();
    log::info!(
        "Done after {} tick(s): {} of {} coin(s) consumed",
        tick,
        total - registry.live_count(),
        total
    );
}
