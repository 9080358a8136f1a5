//! Aggregator behaviour: capacity, single-type enforcement, merge ordering,
//! removal, and slot transfers.

use hearthwood_engine::inventory::bundle::{AnyContent, NESTED_BUNDLE_WEIGHT, default_unit_weight};
use hearthwood_engine::inventory::{
    Actor, BundleContents, BundleContentsMut, ContainerSlot, ContentPolicy, Fraction, ItemId, ItemStack, Slot,
    StackComponents,
};

const APPLE: ItemId = ItemId(1);
const BREAD: ItemId = ItemId(2);
const STONE: ItemId = ItemId(3);

/// Anything but stone.
struct NoStone;

impl ContentPolicy for NoStone {
    fn is_acceptable(&self, stack: &ItemStack) -> bool {
        stack.item != STONE
    }
}

/// Every item weighs 1/16 regardless of its stack size.
struct Sixteenths;

impl ContentPolicy for Sixteenths {
    fn is_acceptable(&self, _stack: &ItemStack) -> bool {
        true
    }

    fn unit_weight(&self, _stack: &ItemStack) -> Fraction {
        Fraction::new(1, 16)
    }
}

fn stack(item: ItemId, count: u32) -> ItemStack {
    ItemStack::new(item, count, 64)
}

// ---------------------------------------------------------------------------
// Insert
// ---------------------------------------------------------------------------

#[test]
fn fills_to_exact_capacity_and_leaves_remainder() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    let mut apples = stack(APPLE, 70);

    assert_eq!(bundle.try_insert(&mut apples), 64);
    assert_eq!(bundle.weight(), Fraction::ONE);
    assert_eq!(apples.count, 6);

    assert_eq!(bundle.try_insert(&mut apples), 0);
    assert_eq!(apples.count, 6);
}

#[test]
fn partial_room_accepts_floor_of_remaining() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    // 63/64 used, then a 1/16 item fits zero times.
    let mut apples = stack(APPLE, 63);
    bundle.try_insert(&mut apples);
    let mut heavy = ItemStack::new(APPLE, 4, 16);
    assert_eq!(bundle.max_amount_to_add(&heavy), 0);
    assert_eq!(bundle.try_insert(&mut heavy), 0);
    assert_eq!(heavy.count, 4);
}

#[test]
fn rejected_stacks_are_untouched() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    let mut stone = stack(STONE, 10);
    let mut nothing = ItemStack::empty();

    assert_eq!(bundle.try_insert(&mut stone), 0);
    assert_eq!(bundle.try_insert(&mut nothing), 0);
    assert_eq!(stone.count, 10);
    assert!(bundle.is_empty());
    assert_eq!(bundle.weight(), Fraction::ZERO);
}

#[test]
fn second_item_type_is_refused_once_non_empty() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    bundle.try_insert(&mut stack(APPLE, 1));

    let mut bread = stack(BREAD, 5);
    assert_eq!(bundle.try_insert(&mut bread), 0);
    assert_eq!(bread.count, 5);
    assert_eq!(bundle.len(), 1);
}

#[test]
fn repeated_inserts_merge_into_front_entry() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &Sixteenths);
    assert_eq!(bundle.try_insert(&mut stack(APPLE, 4)), 4);
    assert_eq!(bundle.try_insert(&mut stack(BREAD, 1)), 0);
    assert_eq!(bundle.try_insert(&mut stack(APPLE, 3)), 3);

    let contents = bundle.to_immutable();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents.get(0).unwrap().item, APPLE);
    assert_eq!(contents.get(0).unwrap().count, 7);
    assert_eq!(contents.weight(), Fraction::new(7, 16));
}

#[test]
fn merge_moves_existing_entry_to_front() {
    // Two apple entries that differ by component never merge with each
    // other, but a plain apple merges with the plain entry and moves it up.
    let marked = stack(APPLE, 2).with_components(StackComponents {
        occupants: 0,
        block_state: Some(hearthwood_engine::world::block::BlockId(9)),
        bundle: None,
    });
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &Sixteenths);
    bundle.try_insert(&mut stack(APPLE, 1));
    bundle.try_insert(&mut marked.clone());
    assert_eq!(bundle.items().next().unwrap().components, marked.components);

    bundle.try_insert(&mut stack(APPLE, 2));
    let items = bundle.items_copy();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].count, 3);
    assert!(items[0].components.is_empty());
    assert_eq!(items[1].count, 2);
}

#[test]
fn unstackable_items_get_their_own_entries() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    let mut first = ItemStack::new(APPLE, 1, 1);
    let mut second = ItemStack::new(APPLE, 1, 1);
    // Each weighs a full unit, so only the first fits.
    assert_eq!(bundle.try_insert(&mut first), 1);
    assert_eq!(bundle.try_insert(&mut second), 0);
    assert!(first.is_empty());

    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &Sixteenths);
    bundle.try_insert(&mut ItemStack::new(APPLE, 1, 1));
    bundle.try_insert(&mut ItemStack::new(APPLE, 1, 1));
    assert_eq!(bundle.len(), 2);
}

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

#[test]
fn indivisible_item_fills_the_bundle() {
    let nest = ItemStack::new(APPLE, 1, 64).with_components(StackComponents {
        occupants: 2,
        ..Default::default()
    });
    assert_eq!(default_unit_weight(&nest), Fraction::ONE);

    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &AnyContent);
    assert_eq!(bundle.try_insert(&mut nest.clone()), 1);
    assert_eq!(bundle.weight(), Fraction::ONE);
    assert_eq!(bundle.try_insert(&mut nest.clone()), 0);
}

#[test]
fn nested_bundle_uses_flat_overhead_plus_recorded_weight() {
    let inner = BundleContents::new(vec![stack(APPLE, 16)], &AnyContent);
    assert_eq!(inner.weight(), Fraction::new(1, 4));

    let bag = ItemStack::new(BREAD, 1, 1).with_components(StackComponents {
        bundle: Some(Box::new(inner)),
        ..Default::default()
    });
    assert_eq!(default_unit_weight(&bag), NESTED_BUNDLE_WEIGHT + Fraction::new(1, 4));

    let outer = BundleContents::new(vec![bag], &AnyContent);
    assert_eq!(outer.weight(), Fraction::new(5, 16));
}

#[test]
fn snapshot_weight_is_recomputed_on_construction() {
    let contents = BundleContents::new(vec![stack(APPLE, 8), stack(APPLE, 24)], &NoStone);
    assert_eq!(contents.weight(), Fraction::new(1, 2));
    let bundle = BundleContentsMut::new(&contents, &NoStone);
    assert_eq!(bundle.weight(), Fraction::new(1, 2));
    assert_eq!(bundle.max_amount_to_add(&stack(APPLE, 1)), 32);
}

// ---------------------------------------------------------------------------
// Remove / clear / finalize
// ---------------------------------------------------------------------------

#[test]
fn remove_one_pops_whole_front_entry() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    bundle.try_insert(&mut stack(APPLE, 10));

    let removed = bundle.remove_one().unwrap();
    assert_eq!(removed.count, 10);
    assert!(bundle.is_empty());
    assert_eq!(bundle.weight(), Fraction::ZERO);
}

#[test]
fn remove_one_on_empty_is_none() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    assert!(bundle.remove_one().is_none());
    assert_eq!(bundle.weight(), Fraction::ZERO);
}

#[test]
fn clear_and_finalize() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    bundle.try_insert(&mut stack(APPLE, 10));
    bundle.clear_items();
    assert_eq!(bundle.weight(), Fraction::ZERO);
    assert_eq!(bundle.to_immutable(), BundleContents::EMPTY);
}

// ---------------------------------------------------------------------------
// Transfer from slots
// ---------------------------------------------------------------------------

#[test]
fn transfer_takes_only_what_fits() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    bundle.try_insert(&mut stack(APPLE, 60));

    let mut slot = ContainerSlot::new(stack(APPLE, 10));
    assert_eq!(bundle.try_transfer(&mut slot, &Actor::survival(1)), 4);
    assert_eq!(slot.item().count, 6);
    assert_eq!(bundle.weight(), Fraction::ONE);
}

#[test]
fn locked_slot_denies_survival_but_not_creative() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    let mut slot = ContainerSlot::locked(stack(APPLE, 10));

    assert_eq!(bundle.try_transfer(&mut slot, &Actor::survival(1)), 0);
    assert_eq!(slot.item().count, 10);
    assert!(bundle.is_empty());

    assert_eq!(bundle.try_transfer(&mut slot, &Actor::creative(2)), 10);
    assert!(slot.is_empty());
    assert_eq!(bundle.weight(), Fraction::new(10, 64));
}

#[test]
fn transfer_of_wrong_type_leaves_slot_alone() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    bundle.try_insert(&mut stack(APPLE, 1));

    let mut slot = ContainerSlot::new(stack(BREAD, 3));
    assert_eq!(bundle.try_transfer(&mut slot, &Actor::survival(1)), 0);
    assert_eq!(slot.item().count, 3);

    let mut stone = ContainerSlot::new(stack(STONE, 3));
    let mut empty_bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    assert_eq!(empty_bundle.try_transfer(&mut stone, &Actor::survival(1)), 0);
    assert_eq!(stone.item().count, 3);
}

/// A slot that hands over at most one unit per take.
struct StingySlot(ItemStack);

impl Slot for StingySlot {
    fn item(&self) -> &ItemStack {
        &self.0
    }

    fn may_pickup(&self, _actor: &Actor) -> bool {
        true
    }

    fn safe_take(&mut self, count: u32, max: u32, _actor: &Actor) -> ItemStack {
        self.0.split(count.min(max).min(1))
    }

    fn safe_insert(&mut self, mut stack: ItemStack) -> ItemStack {
        self.0.grow(stack.count);
        stack.count = 0;
        stack
    }
}

#[test]
fn partially_denied_withdrawal_is_not_double_counted() {
    let mut bundle = BundleContentsMut::new(&BundleContents::EMPTY, &NoStone);
    let mut slot = StingySlot(stack(APPLE, 10));

    assert_eq!(bundle.try_transfer(&mut slot, &Actor::survival(1)), 1);
    assert_eq!(slot.0.count, 9);
    assert_eq!(bundle.weight(), Fraction::new(1, 64));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "bundle overfilled")]
fn overfilled_snapshot_trips_the_capacity_check() {
    let wheels: Vec<ItemStack> = (0..3).map(|_| ItemStack::new(BREAD, 1, 1)).collect();
    let snapshot = BundleContents::new(wheels, &AnyContent);
    assert_eq!(snapshot.weight(), Fraction::from_int(3));

    let mut bundle = BundleContentsMut::new(&snapshot, &AnyContent);
    bundle.remove_one();
}
