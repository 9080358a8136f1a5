use std::path::PathBuf;

use anyhow::{Context, Result};
use hearthwood_content::log_pile::{self, LogPiles};
use hearthwood_content::player::Player;
use hearthwood_content::{block, food_bundle, item, pan, persistence, rules};
use hearthwood_engine::causal::event::Event;
use hearthwood_engine::inventory::{Actor, ContainerSlot, Slot};
use hearthwood_engine::world::World;
use hearthwood_engine::world::position::{BlockPos, Direction};

fn main() {
    let save_dir: PathBuf = std::env::args()
        .skip_while(|a| a != "--save")
        .nth(1)
        .unwrap_or_else(|| "save".into())
        .into();
    let dump_dot = std::env::args().any(|a| a == "--dot");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run_demo(&save_dir, dump_dot) {
        tracing::error!("Demo failed: {:#}", e);
        std::process::exit(1);
    }
}

/// Walk through every piece of content once: stack logs, pan gravel, fill a
/// food bundle, set a pile alight, knock one over, and save/load the results.
fn run_demo(save_dir: &std::path::Path, dump_dot: bool) -> Result<()> {
    tracing::info!("Hearthwood content demo");

    let world = World::new();
    for x in 0..8 {
        for z in 0..8 {
            world.set_block(BlockPos::new(x, 0, z), block::STONE);
        }
    }
    world.set_block(BlockPos::new(6, 1, 6), block::GRAVEL);
    tracing::info!("Ground ready: {} blocks", world.block_count());

    let piles = LogPiles::new();
    let mut player = Player::new(Actor::survival(1));

    // ── Log piles ────────────────────────────────────────────────────────
    let mut logs = item::stack(item::OAK_LOG, 20);
    let base = BlockPos::new(2, 1, 2);
    let placed = log_pile::place(&world, &piles, base, Direction::East, &mut logs);
    rules::run_cascade(&world, placed.events);
    while !logs.is_empty() {
        let used = log_pile::use_item_on(&world, &piles, base, &player, &mut logs);
        if used.events.is_empty() {
            break;
        }
        rules::run_cascade(&world, used.events);
    }
    for pos in piles.positions() {
        let count = piles.get(pos).map_or(0, |inv| inv.total());
        tracing::info!("Log pile at {:?}: {} logs, state {:?}", pos, count, block::log_pile_state(world.get_block(pos)));
    }

    // ── Pan ──────────────────────────────────────────────────────────────
    let mut pans = item::stack(item::EMPTY_PAN, 2);
    let panned = pan::use_on(&world, BlockPos::new(6, 1, 6), &mut player, &mut pans);
    rules::run_cascade(&world, panned.events);
    tracing::info!("Pan result {:?}; filled pans in inventory: {}", panned.result, player.count_of(item::FILLED_PAN));

    // ── Food bundle ──────────────────────────────────────────────────────
    let mut bundle = food_bundle::new_bundle();
    let mut apples = ContainerSlot::new(item::stack(item::APPLE, 40));
    let mut bread = ContainerSlot::new(item::stack(item::BREAD, 10));
    food_bundle::stacked_on_slot(&mut bundle, &mut apples, &player.actor);
    food_bundle::stacked_on_slot(&mut bundle, &mut bread, &player.actor);
    let contents = food_bundle::contents(&bundle);
    tracing::info!(
        "Food bundle: {:?} (bar {}/{}), {} apples left in slot, {} bread refused",
        food_bundle::tooltip(&contents),
        food_bundle::fullness_bar(&contents),
        food_bundle::BAR_WIDTH,
        apples.item().count,
        bread.item().count
    );

    // ── Fire and collapse ────────────────────────────────────────────────
    let fire_pos = base.offset(Direction::West);
    let graph = rules::run_cascade(&world, vec![Event::set(fire_pos, block::AIR, block::FIRE)]);
    tracing::info!("Fire at {:?}: pile is now {:?}", fire_pos, world.get_block(base));
    if dump_dot {
        print!("{}", graph.to_dot());
    }

    let mut more_logs = item::stack(item::BIRCH_LOG, 3);
    let lone = BlockPos::new(5, 1, 2);
    let placed = log_pile::place(&world, &piles, lone, Direction::North, &mut more_logs);
    rules::run_cascade(&world, placed.events);
    let under = lone.below();
    rules::run_cascade(&world, vec![Event::set(under, block::STONE, block::AIR)]);
    let drops = piles.sweep(&world);
    tracing::info!("Removed support under {:?}: {} stacks dropped from vanished piles", lone, drops.len());

    // ── Persistence ──────────────────────────────────────────────────────
    persistence::save_bundle(&contents, save_dir)?;
    let saved = persistence::save_log_piles(&piles, save_dir)?;
    tracing::info!("Saved bundle and {} log piles to {}", saved, save_dir.display());

    let reloaded = persistence::load_bundle(save_dir)?.context("bundle file vanished after save")?;
    let reloaded_piles = LogPiles::new();
    let n = persistence::load_log_piles_into(&reloaded_piles, save_dir)?;
    if reloaded == contents && n == saved {
        tracing::info!("Reload matches: weight {}, {} piles", reloaded.weight(), n);
    } else {
        tracing::warn!("Reloaded data differs from what was saved");
    }
    Ok(())
}
