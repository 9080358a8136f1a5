use hearthwood_engine::inventory::{Actor, ItemId, ItemStack};
use indexmap::IndexMap;

/// Main inventory size (hotbar included).
pub const INVENTORY_SIZE: usize = 36;

/// The interacting player, reduced to what content code needs.
#[derive(Debug, Clone)]
pub struct Player {
    pub actor: Actor,
    pub sneaking: bool,
    pub inventory: Vec<ItemStack>,
    /// "Item used" statistic, in first-use order.
    pub items_used: IndexMap<ItemId, u32>,
    /// Stacks thrown on the ground because the inventory was full.
    pub dropped: Vec<ItemStack>,
}

impl Player {
    pub fn new(actor: Actor) -> Self {
        Self {
            actor,
            sneaking: false,
            inventory: vec![ItemStack::empty(); INVENTORY_SIZE],
            items_used: IndexMap::new(),
            dropped: Vec::new(),
        }
    }

    pub fn is_creative(&self) -> bool {
        self.actor.creative
    }

    /// Merge into matching stacks first, then fill empty slots. Returns true
    /// when all of `stack` found room; whatever is left stays in `stack`.
    pub fn add(&mut self, stack: &mut ItemStack) -> bool {
        for slot in self.inventory.iter_mut() {
            if stack.is_empty() {
                break;
            }
            if !slot.is_empty() && ItemStack::is_same_item_same_components(slot, stack) {
                let room = slot.max_stack_size.saturating_sub(slot.count);
                let moved = room.min(stack.count);
                slot.grow(moved);
                stack.shrink(moved);
            }
        }
        for slot in self.inventory.iter_mut() {
            if stack.is_empty() {
                break;
            }
            if slot.is_empty() {
                *slot = stack.split(stack.max_stack_size);
            }
        }
        stack.is_empty()
    }

    pub fn drop_stack(&mut self, stack: ItemStack) {
        if !stack.is_empty() {
            tracing::debug!(item = stack.item.0, count = stack.count, "player dropped stack");
            self.dropped.push(stack);
        }
    }

    pub fn award_item_used(&mut self, item: ItemId) {
        *self.items_used.entry(item).or_insert(0) += 1;
    }

    pub fn count_of(&self, item: ItemId) -> u32 {
        self.inventory.iter().filter(|s| s.is(item)).map(|s| s.count).sum()
    }
}
