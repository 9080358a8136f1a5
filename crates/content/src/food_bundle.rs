//! Food bundles: a bundle that only carries food, one kind at a time.
//!
//! The contents live on the bundle stack as a `BundleContents` component;
//! every interaction thaws them into a `BundleContentsMut`, applies the
//! move, and freezes the result back onto the stack.

use hearthwood_engine::inventory::{
    Actor, BundleContents, BundleContentsMut, ContentPolicy, Fraction, ItemStack, Slot,
};

use crate::item::{self, Tag};

/// Width of a full fullness bar, in segments.
pub const BAR_WIDTH: u32 = 13;

/// What a food bundle accepts: foods that may go inside containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FoodPolicy;

impl ContentPolicy for FoodPolicy {
    fn is_acceptable(&self, stack: &ItemStack) -> bool {
        !stack.is_empty() && item::fits_inside_containers(stack.item) && item::has_tag(stack.item, Tag::Foods)
    }
}

pub fn new_bundle() -> ItemStack {
    item::stack(item::FOOD_BUNDLE, 1)
}

pub fn is_bundle(stack: &ItemStack) -> bool {
    stack.is(item::FOOD_BUNDLE)
}

pub fn contents(bundle: &ItemStack) -> BundleContents {
    bundle.components.bundle.as_deref().cloned().unwrap_or_default()
}

pub fn set_contents(bundle: &mut ItemStack, contents: BundleContents) {
    bundle.components.bundle = if contents.is_empty() { None } else { Some(Box::new(contents)) };
}

/// Thaw, mutate, and freeze the bundle's contents.
fn edit<R>(bundle: &mut ItemStack, f: impl FnOnce(&mut BundleContentsMut<'_, FoodPolicy>) -> R) -> R {
    let snapshot = contents(bundle);
    let mut mutable = BundleContentsMut::new(&snapshot, &FoodPolicy);
    let out = f(&mut mutable);
    set_contents(bundle, mutable.to_immutable());
    out
}

/// The bundle (held on the cursor) is clicked onto `slot`.
///
/// An empty slot receives the bundle's front entry; an occupied slot has as
/// much as fits pulled into the bundle. Returns false if `bundle` is not a
/// food bundle.
pub fn stacked_on_slot<S: Slot + ?Sized>(bundle: &mut ItemStack, slot: &mut S, actor: &Actor) -> bool {
    if !is_bundle(bundle) {
        return false;
    }
    edit(bundle, |m| {
        if slot.is_empty() {
            if let Some(out) = m.remove_one() {
                let mut leftover = slot.safe_insert(out);
                m.try_insert(&mut leftover);
            }
        } else {
            let moved = m.try_transfer(slot, actor);
            tracing::debug!(moved, "food bundle pulled from slot");
        }
    });
    true
}

/// Something on the cursor is clicked onto the bundle sitting in a slot.
///
/// An empty cursor takes the bundle's front entry; otherwise the cursor
/// stack is inserted as far as it fits. Returns false if `bundle` is not a
/// food bundle.
pub fn stacked_on_by(bundle: &mut ItemStack, cursor: &mut ItemStack) -> bool {
    if !is_bundle(bundle) {
        return false;
    }
    edit(bundle, |m| {
        if cursor.is_empty() {
            if let Some(out) = m.remove_one() {
                *cursor = out;
            }
        } else {
            m.try_insert(cursor);
        }
    });
    true
}

/// Empty the bundle entirely, front entry first.
pub fn drop_contents(bundle: &mut ItemStack) -> Vec<ItemStack> {
    if !is_bundle(bundle) {
        return Vec::new();
    }
    edit(bundle, |m| std::iter::from_fn(|| m.remove_one()).collect())
}

pub fn is_bar_visible(contents: &BundleContents) -> bool {
    contents.weight() > Fraction::ZERO
}

/// Segments lit on the fullness bar: one for any content, plus twelve scaled
/// by weight.
pub fn fullness_bar(contents: &BundleContents) -> u32 {
    let scaled = contents.weight().mul_int(12).div_floor(Fraction::ONE).max(0) as u32;
    (1 + scaled).min(BAR_WIDTH)
}

pub fn tooltip(contents: &BundleContents) -> Vec<String> {
    let mut lines: Vec<String> = contents
        .items()
        .iter()
        .map(|s| format!("{} x {}", s.count, item::name(s.item)))
        .collect();
    lines.push(format!("fullness {}", contents.weight()));
    lines
}
