//! Neighbour reactions of log piles.
//!
//! Both functions have the `RuleFn` signature so they can be registered
//! directly on a `RuleSet`.

use hearthwood_engine::causal::event::{Event, EventPayload};
use hearthwood_engine::world::World;
use hearthwood_engine::world::block::BlockId;
use hearthwood_engine::world::position::BlockPos;

use crate::block;
use crate::log_pile::can_survive;

/// A pile whose supporting block changed into something it cannot rest on
/// collapses to air. Piles on piles hold each other up, so one collapse can
/// bring down the whole column above it.
pub fn support(world: &World, payload: &EventPayload) -> Vec<Event> {
    let candidate = match payload {
        EventPayload::BlockSet { pos, .. } => pos.above(),
        EventPayload::BlockNotify { pos } => *pos,
        EventPayload::BlockTick { .. } => return Vec::new(),
    };

    let current = world.get_block(candidate);
    if block::is_log_pile(current) && !can_survive(world, candidate) {
        tracing::debug!(pos = ?candidate, "log pile lost its support");
        return vec![Event::set(candidate, current, block::AIR)];
    }
    Vec::new()
}

/// Fire next to a pile lights it; a pile placed or grown next to fire lights
/// itself; a scheduled tick on a pile lights it.
pub fn ignition(world: &World, payload: &EventPayload) -> Vec<Event> {
    match payload {
        EventPayload::BlockSet { pos, new, .. } if block::is_fire(*new) => pos
            .neighbors()
            .into_iter()
            .filter_map(|n| light(world, n))
            .collect(),
        EventPayload::BlockSet { pos, new, .. } if block::is_log_pile(*new) => {
            if pos.neighbors().iter().any(|n| block::is_fire(world.get_block(*n))) {
                light(world, *pos).into_iter().collect()
            } else {
                Vec::new()
            }
        }
        EventPayload::BlockTick { pos } => light(world, *pos).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// Turn the pile at `pos` into a burning pile, if it is a pile.
fn light(world: &World, pos: BlockPos) -> Option<Event> {
    let current: BlockId = world.get_block(pos);
    if !block::is_log_pile(current) {
        return None;
    }
    tracing::debug!(?pos, "log pile ignited");
    Some(Event::set(pos, current, block::BURNING_LOG_PILE))
}
