//! The bounded-capacity aggregator behind bundle-like items.
//!
//! Every stack placed inside consumes `count * unit_weight` of a capacity of
//! exactly one. Entries are kept newest-first: insertions (including merges)
//! go to the front and removals pop the front.

use std::collections::VecDeque;

use super::fraction::Fraction;
use super::slot::{Actor, Slot};
use super::stack::ItemStack;

/// Flat weight charged for a container stored inside another container, on
/// top of the inner container's own recorded weight.
pub const NESTED_BUNDLE_WEIGHT: Fraction = Fraction::recip(16);

/// Host-supplied rules for what may go in and how much room it takes.
pub trait ContentPolicy {
    fn is_acceptable(&self, stack: &ItemStack) -> bool;

    fn unit_weight(&self, stack: &ItemStack) -> Fraction {
        default_unit_weight(stack)
    }
}

/// Weight of one unit of `stack`:
/// - a nested container costs [`NESTED_BUNDLE_WEIGHT`] plus the weight it
///   already records (its items are not revisited),
/// - an occupied item costs the whole capacity,
/// - anything else costs `1 / max_stack_size`.
pub fn default_unit_weight(stack: &ItemStack) -> Fraction {
    if let Some(nested) = &stack.components.bundle {
        NESTED_BUNDLE_WEIGHT + nested.weight()
    } else if stack.components.occupants > 0 {
        Fraction::ONE
    } else {
        Fraction::recip(stack.max_stack_size)
    }
}

/// Accepts every non-empty stack with the default weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyContent;

impl ContentPolicy for AnyContent {
    fn is_acceptable(&self, stack: &ItemStack) -> bool {
        !stack.is_empty()
    }
}

fn content_weight<P: ContentPolicy + ?Sized>(items: &[ItemStack], policy: &P) -> Fraction {
    items
        .iter()
        .fold(Fraction::ZERO, |acc, stack| acc + policy.unit_weight(stack).mul_int(stack.count))
}

/// A frozen set of container contents, suitable for storing on a stack or
/// writing to disk.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BundleContents {
    items: Vec<ItemStack>,
    weight: Fraction,
}

impl BundleContents {
    pub const EMPTY: BundleContents = BundleContents {
        items: Vec::new(),
        weight: Fraction::ZERO,
    };

    pub fn empty() -> Self {
        Self::EMPTY
    }

    /// Build from a decoded or hand-made item list; weight is computed once here.
    pub fn new<P: ContentPolicy + ?Sized>(items: Vec<ItemStack>, policy: &P) -> Self {
        let weight = content_weight(&items, policy);
        Self { items, weight }
    }

    pub fn items(&self) -> &[ItemStack] {
        &self.items
    }

    pub fn items_copy(&self) -> Vec<ItemStack> {
        self.items.clone()
    }

    pub fn into_items(self) -> Vec<ItemStack> {
        self.items
    }

    pub fn get(&self, index: usize) -> Option<&ItemStack> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn weight(&self) -> Fraction {
        self.weight
    }
}

/// The live aggregator. Built from a snapshot, mutated through the methods
/// below, and frozen again with [`BundleContentsMut::to_immutable`].
pub struct BundleContentsMut<'p, P: ContentPolicy + ?Sized> {
    items: VecDeque<ItemStack>,
    weight: Fraction,
    policy: &'p P,
}

impl<'p, P: ContentPolicy + ?Sized> BundleContentsMut<'p, P> {
    pub fn new(contents: &BundleContents, policy: &'p P) -> Self {
        Self {
            items: contents.items.iter().cloned().collect(),
            weight: content_weight(&contents.items, policy),
            policy,
        }
    }

    pub fn clear_items(&mut self) -> &mut Self {
        self.items.clear();
        self.weight = Fraction::ZERO;
        self
    }

    pub fn weight(&self) -> Fraction {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemStack> {
        self.items.iter()
    }

    pub fn items_copy(&self) -> Vec<ItemStack> {
        self.items.iter().cloned().collect()
    }

    /// Whether `stack` passes the capability check: non-empty, allowed by
    /// the policy, and the same item as the current front entry (once there
    /// is one).
    pub fn can_accept(&self, stack: &ItemStack) -> bool {
        if stack.is_empty() || !self.policy.is_acceptable(stack) {
            return false;
        }
        self.items.front().is_none_or(|front| front.item == stack.item)
    }

    /// How many units of `stack` would still fit.
    pub fn max_amount_to_add(&self, stack: &ItemStack) -> u32 {
        self.max_units(self.policy.unit_weight(stack))
    }

    fn max_units(&self, unit: Fraction) -> u32 {
        debug_assert!(unit > Fraction::ZERO, "unit weight must be positive, got {unit}");
        if unit <= Fraction::ZERO {
            return 0;
        }
        (Fraction::ONE - self.weight).div_floor(unit).clamp(0, u32::MAX as i64) as u32
    }

    fn find_stack_index(&self, stack: &ItemStack) -> Option<usize> {
        if !stack.is_stackable() {
            return None;
        }
        self.items
            .iter()
            .position(|existing| ItemStack::is_same_item_same_components(existing, stack))
    }

    /// Move as many units of `stack` in as fit. `stack` shrinks by the number
    /// accepted, which is also the return value.
    pub fn try_insert(&mut self, stack: &mut ItemStack) -> u32 {
        if !self.can_accept(stack) {
            return 0;
        }
        let unit = self.policy.unit_weight(stack);
        let accepted = stack.count.min(self.max_units(unit));
        if accepted == 0 {
            return 0;
        }

        self.weight = self.weight + unit.mul_int(accepted);
        match self.find_stack_index(stack).and_then(|i| self.items.remove(i)) {
            Some(mut existing) => {
                existing.grow(accepted);
                stack.shrink(accepted);
                self.items.push_front(existing);
            }
            None => self.items.push_front(stack.split(accepted)),
        }

        tracing::debug!(item = stack.item.0, accepted, weight = %self.weight, "bundle insert");
        self.check_invariant();
        accepted
    }

    /// Pull from `slot` as much as fits and insert it. Units the slot hands
    /// over but that cannot be inserted are given back to the slot.
    pub fn try_transfer<S: Slot + ?Sized>(&mut self, slot: &mut S, actor: &Actor) -> u32 {
        let available = slot.item().clone();
        if !self.can_accept(&available) {
            return 0;
        }
        let max = self.max_amount_to_add(&available);
        if max == 0 {
            return 0;
        }

        let mut taken = slot.safe_take(available.count, max, actor);
        if taken.is_empty() {
            return 0;
        }
        let inserted = self.try_insert(&mut taken);
        if !taken.is_empty() {
            let lost = slot.safe_insert(taken);
            if !lost.is_empty() {
                tracing::warn!(item = lost.item.0, count = lost.count, "slot refused returned items");
            }
        }
        inserted
    }

    /// Pop the whole front entry.
    pub fn remove_one(&mut self) -> Option<ItemStack> {
        let stack = self.items.pop_front()?;
        self.weight = self.weight - self.policy.unit_weight(&stack).mul_int(stack.count);
        tracing::debug!(item = stack.item.0, count = stack.count, weight = %self.weight, "bundle remove");
        self.check_invariant();
        Some(stack)
    }

    pub fn to_immutable(self) -> BundleContents {
        BundleContents {
            items: self.items.into(),
            weight: self.weight,
        }
    }

    fn check_invariant(&self) {
        debug_assert!(!self.weight.is_negative(), "negative bundle weight: {}", self.weight);
        debug_assert!(self.weight <= Fraction::ONE, "bundle overfilled: {}", self.weight);
        debug_assert_eq!(
            self.weight,
            self.items
                .iter()
                .fold(Fraction::ZERO, |acc, s| acc + self.policy.unit_weight(s).mul_int(s.count)),
            "bundle weight drifted from its contents"
        );
    }
}
