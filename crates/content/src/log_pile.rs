//! The log pile: a placeable stack of logs whose shape grows with its count
//! and which catches fire from adjacent flames.
//!
//! Block state (axis + visible count) lives in the world as a `BlockId`; the
//! logs themselves live in a per-position [`LogPileInventory`] held by
//! [`LogPiles`].

use std::sync::LazyLock;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use hearthwood_engine::causal::event::Event;
use hearthwood_engine::inventory::ItemStack;
use hearthwood_engine::world::World;
use hearthwood_engine::world::block::BlockId;
use hearthwood_engine::world::position::{Axis, BlockPos, Direction};
use hearthwood_engine::world::shape::{VoxelShape, rotate_box};

use crate::block::{self, LOG_PILE_MAX_COUNT};
use crate::interaction::{Interaction, InteractionResult};
use crate::item::{self, Tag};
use crate::player::Player;

pub const SLOTS: usize = 4;
/// Logs per inventory slot.
pub const SLOT_LIMIT: u32 = 4;

// ── Shapes ───────────────────────────────────────────────────────────────

/// Shapes indexed by `[axis][count - 1]`, axis 0 = X, 1 = Z.
///
/// Each count fills whole 4-pixel layers below (`box1`) plus a partial
/// layer of `row` quarter-rows on top (`box2`). X piles are the south-facing
/// rotation, Z piles the east-facing one.
pub static SHAPES_BY_AXIS_BY_COUNT: LazyLock<[[VoxelShape; 16]; 2]> = LazyLock::new(|| {
    let mut box1_by_count = [[0.0f64; 6]; 16];
    let mut box2_by_count = [[0.0f64; 6]; 16];
    for i in 0..16 {
        let layer = (i / 4) as f64;
        let row = (i % 4 + 1) as f64;
        box2_by_count[i] = [0.0, 4.0 * layer, 0.0, 16.0, 4.0 * layer + 4.0, 4.0 * row];
        box1_by_count[i] = [0.0, 0.0, 0.0, 16.0, 4.0 * layer, 16.0];
    }

    [Direction::South, Direction::East].map(|direction| {
        std::array::from_fn(|count| {
            let [a1, b1, c1, d1, e1, f1] = box1_by_count[count];
            let [a2, b2, c2, d2, e2, f2] = box2_by_count[count];
            rotate_box(direction, a1, b1, c1, d1, e1, f1).or(rotate_box(direction, a2, b2, c2, d2, e2, f2))
        })
    })
});

/// Outline, collision, and visual shape all share this table.
pub fn shape(axis: Axis, count: u8) -> &'static VoxelShape {
    let index = count.clamp(1, LOG_PILE_MAX_COUNT) as usize - 1;
    match axis {
        Axis::Z => &SHAPES_BY_AXIS_BY_COUNT[1][index],
        Axis::X | Axis::Y => &SHAPES_BY_AXIS_BY_COUNT[0][index],
    }
}

/// Shape of whatever log pile state `id` is; empty for anything else.
pub fn shape_of(id: BlockId) -> VoxelShape {
    block::log_pile_state(id).map_or_else(VoxelShape::empty, |s| shape(s.axis, s.count).clone())
}

// ── Placement and survival ───────────────────────────────────────────────

/// A new pile lies along the direction the placer is looking.
pub fn state_for_placement(facing: Direction) -> BlockId {
    block::log_pile(facing.axis(), 1)
}

pub fn can_survive(world: &World, pos: BlockPos) -> bool {
    let below = world.get_block(pos.below());
    block::is_face_sturdy_up(below) || block::is_log_pile(below)
}

// ── Inventory ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogPileInventory {
    slots: [ItemStack; SLOTS],
}

impl LogPileInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_log(stack: &ItemStack) -> bool {
        !stack.is_empty() && item::has_tag(stack.item, Tag::LogPileLogs)
    }

    /// Copy one unit of `stack` into the first slot that takes it. The caller
    /// shrinks its own stack on success.
    pub fn insert_one(&mut self, stack: &ItemStack) -> bool {
        if !Self::is_log(stack) {
            return false;
        }
        let slot = self.slots.iter_mut().find(|slot| {
            slot.is_empty() || (ItemStack::is_same_item_same_components(slot, stack) && slot.count < SLOT_LIMIT)
        });
        match slot {
            Some(slot) if slot.is_empty() => {
                *slot = stack.copy_with_count(1);
                true
            }
            Some(slot) => {
                slot.grow(1);
                true
            }
            None => false,
        }
    }

    pub fn set_slot(&mut self, index: usize, stack: ItemStack) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = stack;
        }
    }

    pub fn slots(&self) -> &[ItemStack] {
        &self.slots
    }

    pub fn total(&self) -> u32 {
        self.slots.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(ItemStack::is_empty)
    }

    /// The item a pick-block on this pile yields.
    pub fn first_non_empty(&self) -> Option<ItemStack> {
        self.slots.iter().find(|s| !s.is_empty()).cloned()
    }

    pub fn take_all(&mut self) -> Vec<ItemStack> {
        self.slots
            .iter_mut()
            .map(std::mem::take)
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Inventories for every log pile in a world, keyed by position.
#[derive(Default)]
pub struct LogPiles {
    inventories: DashMap<BlockPos, LogPileInventory>,
}

impl LogPiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: BlockPos) -> Option<LogPileInventory> {
        self.inventories.get(&pos).map(|inv| inv.value().clone())
    }

    pub fn contains(&self, pos: BlockPos) -> bool {
        self.inventories.contains_key(&pos)
    }

    pub fn insert(&self, pos: BlockPos, inventory: LogPileInventory) {
        self.inventories.insert(pos, inventory);
    }

    pub fn remove(&self, pos: BlockPos) -> Option<LogPileInventory> {
        self.inventories.remove(&pos).map(|(_, inv)| inv)
    }

    pub fn len(&self) -> usize {
        self.inventories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventories.is_empty()
    }

    pub fn positions(&self) -> Vec<BlockPos> {
        let mut out: Vec<BlockPos> = self.inventories.iter().map(|e| *e.key()).collect();
        out.sort();
        out
    }

    /// Insert one log at `pos`.
    fn insert_one(&self, pos: BlockPos, stack: &ItemStack) -> Stacked {
        let Some(mut inventory) = self.inventories.get_mut(&pos) else {
            return Stacked::Missing;
        };
        if inventory.insert_one(stack) {
            Stacked::Added(inventory.total())
        } else {
            Stacked::Full
        }
    }

    /// Store a fresh inventory at `pos`, handing back whatever a stale
    /// inventory there still held.
    fn replace(&self, pos: BlockPos, inventory: LogPileInventory) -> Vec<ItemStack> {
        match self.inventories.entry(pos) {
            Entry::Occupied(mut e) => {
                let stale = e.get_mut().take_all();
                tracing::debug!(?pos, stacks = stale.len(), "replacing stale log pile inventory");
                e.insert(inventory);
                stale
            }
            Entry::Vacant(e) => {
                e.insert(inventory);
                Vec::new()
            }
        }
    }

    /// Drop the inventories of piles whose block is gone (collapsed or
    /// broken) and return their contents. A burning pile keeps its logs as fuel.
    pub fn sweep(&self, world: &World) -> Vec<ItemStack> {
        let gone: Vec<BlockPos> = self
            .inventories
            .iter()
            .filter(|e| {
                let state = world.get_block(*e.key());
                !block::is_log_pile(state) && state != block::BURNING_LOG_PILE
            })
            .map(|e| *e.key())
            .collect();

        let mut drops = Vec::new();
        for pos in gone {
            if let Some(mut inventory) = self.remove(pos) {
                tracing::debug!(?pos, logs = inventory.total(), "log pile removed, dropping contents");
                drops.extend(inventory.take_all());
            }
        }
        drops
    }

    /// Pick-block result for the pile at `pos`.
    pub fn clone_item(&self, pos: BlockPos) -> ItemStack {
        self.inventories
            .get(&pos)
            .and_then(|inv| inv.first_non_empty())
            .unwrap_or_default()
    }
}

// ── Interaction ──────────────────────────────────────────────────────────

/// Start a new pile at `pos` from one log of `stack`.
pub fn place(world: &World, piles: &LogPiles, pos: BlockPos, facing: Direction, stack: &mut ItemStack) -> Interaction {
    let current = world.get_block(pos);
    if !LogPileInventory::is_log(stack) || !block::is_replaceable(current) || !can_survive(world, pos) {
        return Interaction::pass();
    }

    let mut inventory = LogPileInventory::new();
    inventory.insert_one(stack);
    let stale = piles.replace(pos, inventory);
    stack.shrink(1);

    let state = state_for_placement(facing);
    tracing::debug!(?pos, ?facing, "log pile placed");
    Interaction::with_events(InteractionResult::Success, vec![Event::set(pos, current, state)]).with_drops(stale)
}

/// Right-click on an existing pile. Logs go into the pile (or start a new
/// pile above it once it is full); anything else opens the pile's menu.
pub fn use_item_on(world: &World, piles: &LogPiles, pos: BlockPos, player: &Player, stack: &mut ItemStack) -> Interaction {
    if player.sneaking {
        return Interaction::pass();
    }
    let Some(state) = block::log_pile_state(world.get_block(pos)) else {
        return Interaction::pass();
    };
    // A pile block without an inventory swallows the click.
    if !piles.contains(pos) {
        return Interaction::new(InteractionResult::Success);
    }
    if !LogPileInventory::is_log(stack) {
        return Interaction::new(InteractionResult::OpenMenu(pos));
    }

    let mut events = Vec::new();
    let mut drops = Vec::new();
    add_log(world, piles, pos, state.axis, stack, &mut events, &mut drops);
    Interaction::with_events(InteractionResult::Success, events).with_drops(drops)
}

fn add_log(
    world: &World,
    piles: &LogPiles,
    pos: BlockPos,
    axis: Axis,
    stack: &mut ItemStack,
    events: &mut Vec<Event>,
    drops: &mut Vec<ItemStack>,
) {
    let current = world.get_block(pos);
    match piles.insert_one(pos, stack) {
        Stacked::Added(total) => {
            stack.shrink(1);
            events.push(Event::set(pos, current, block::log_pile(axis, visible_count(total))));
            return;
        }
        Stacked::Missing => return,
        Stacked::Full => {}
    }

    let above = pos.above();
    let above_block = world.get_block(above);
    if above_block.is_air() {
        let mut inventory = LogPileInventory::new();
        if inventory.insert_one(stack) {
            drops.extend(piles.replace(above, inventory));
            stack.shrink(1);
            // New piles start in the default orientation.
            events.push(Event::set(above, above_block, block::log_pile(Axis::X, 1)));
        }
    } else if let Some(above_state) = block::log_pile_state(above_block) {
        add_log(world, piles, above, above_state.axis, stack, events, drops);
    }
}

/// Outcome of adding one log to a stored pile inventory.
enum Stacked {
    Added(u32),
    Full,
    Missing,
}

fn visible_count(total: u32) -> u8 {
    total.clamp(1, LOG_PILE_MAX_COUNT as u32) as u8
}
