use super::bundle::BundleContents;
use crate::world::block::BlockId;

/// Opaque item identifier. Content crates assign the meanings; the engine
/// only knows that `ItemId::EMPTY` is "nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ItemId(pub u16);

impl ItemId {
    pub const EMPTY: ItemId = ItemId(0);
}

/// Per-stack data beyond identity and count. Two stacks only merge when
/// their components are equal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackComponents {
    /// The stack is itself a fractional-capacity container.
    pub bundle: Option<Box<BundleContents>>,
    /// Creatures living inside the item. Any occupant makes the stack count
    /// as a full container on its own.
    pub occupants: u32,
    /// A block state captured by the item.
    pub block_state: Option<BlockId>,
}

impl StackComponents {
    pub fn is_empty(&self) -> bool {
        self.bundle.is_none() && self.occupants == 0 && self.block_state.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemStack {
    pub item: ItemId,
    pub count: u32,
    /// Largest count a single stack of this item may hold. Supplied by the
    /// content registry when the stack is made.
    pub max_stack_size: u32,
    pub components: StackComponents,
}

impl ItemStack {
    pub fn new(item: ItemId, count: u32, max_stack_size: u32) -> Self {
        Self {
            item,
            count,
            max_stack_size: max_stack_size.max(1),
            components: StackComponents::default(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_components(mut self, components: StackComponents) -> Self {
        self.components = components;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.item == ItemId::EMPTY || self.count == 0
    }

    pub fn is_stackable(&self) -> bool {
        self.max_stack_size > 1
    }

    pub fn is(&self, item: ItemId) -> bool {
        !self.is_empty() && self.item == item
    }

    /// Take up to `amount` units off this stack into a new stack.
    pub fn split(&mut self, amount: u32) -> ItemStack {
        let taken = amount.min(self.count);
        let out = self.copy_with_count(taken);
        self.shrink(taken);
        out
    }

    pub fn shrink(&mut self, amount: u32) {
        self.count = self.count.saturating_sub(amount);
    }

    pub fn grow(&mut self, amount: u32) {
        self.count += amount;
    }

    pub fn copy_with_count(&self, count: u32) -> ItemStack {
        ItemStack {
            count,
            ..self.clone()
        }
    }

    /// Same item and identical components; counts are ignored.
    pub fn is_same_item_same_components(a: &ItemStack, b: &ItemStack) -> bool {
        a.item == b.item && a.components == b.components
    }
}
