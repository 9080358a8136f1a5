use super::stack::ItemStack;

/// Whoever is moving items around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Actor {
    pub id: u64,
    pub creative: bool,
}

impl Actor {
    pub const fn survival(id: u64) -> Self {
        Self { id, creative: false }
    }

    pub const fn creative(id: u64) -> Self {
        Self { id, creative: true }
    }
}

/// A single inventory slot owned by someone else (a chest, a player
/// inventory, ...). Withdrawals go through the slot so it can apply its own
/// permission rules.
pub trait Slot {
    fn item(&self) -> &ItemStack;

    fn may_pickup(&self, actor: &Actor) -> bool;

    /// Remove up to `min(count, max)` units. Returns an empty stack if the
    /// slot refuses; may hand back fewer units than asked for.
    fn safe_take(&mut self, count: u32, max: u32, actor: &Actor) -> ItemStack;

    /// Put units into the slot. Returns whatever did not fit.
    fn safe_insert(&mut self, stack: ItemStack) -> ItemStack;

    fn is_empty(&self) -> bool {
        self.item().is_empty()
    }
}

/// A plain slot with an optional pickup lock. Creative actors ignore the lock.
#[derive(Debug, Clone, Default)]
pub struct ContainerSlot {
    stack: ItemStack,
    pub locked: bool,
}

impl ContainerSlot {
    pub fn new(stack: ItemStack) -> Self {
        Self { stack, locked: false }
    }

    pub fn locked(stack: ItemStack) -> Self {
        Self { stack, locked: true }
    }

    pub fn into_stack(self) -> ItemStack {
        self.stack
    }
}

impl Slot for ContainerSlot {
    fn item(&self) -> &ItemStack {
        &self.stack
    }

    fn may_pickup(&self, actor: &Actor) -> bool {
        actor.creative || !self.locked
    }

    fn safe_take(&mut self, count: u32, max: u32, actor: &Actor) -> ItemStack {
        if !self.may_pickup(actor) || self.stack.is_empty() {
            return ItemStack::empty();
        }
        let taken = self.stack.split(count.min(max));
        if self.stack.is_empty() {
            self.stack = ItemStack::empty();
        }
        taken
    }

    fn safe_insert(&mut self, mut stack: ItemStack) -> ItemStack {
        if stack.is_empty() {
            return stack;
        }
        if self.stack.is_empty() {
            let fits = stack.count.min(stack.max_stack_size);
            self.stack = stack.split(fits);
        } else if ItemStack::is_same_item_same_components(&self.stack, &stack) {
            let room = self.stack.max_stack_size.saturating_sub(self.stack.count);
            let moved = stack.count.min(room);
            self.stack.grow(moved);
            stack.shrink(moved);
        }
        stack
    }
}
