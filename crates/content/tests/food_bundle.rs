//! Food bundle item behaviour on top of the aggregator.

use hearthwood_content::food_bundle::{self, FoodPolicy};
use hearthwood_content::item;
use hearthwood_engine::inventory::{Actor, ContainerSlot, ContentPolicy, Fraction, ItemStack, Slot};

fn actor() -> Actor {
    Actor::survival(7)
}

#[test]
fn policy_takes_only_food() {
    assert!(FoodPolicy.is_acceptable(&item::stack(item::APPLE, 1)));
    assert!(FoodPolicy.is_acceptable(&item::stack(item::RAW_BEEF, 1)));
    assert!(!FoodPolicy.is_acceptable(&item::stack(item::STICK, 1)));
    assert!(!FoodPolicy.is_acceptable(&item::stack(item::OAK_LOG, 1)));
    assert!(!FoodPolicy.is_acceptable(&food_bundle::new_bundle()));
    assert!(!FoodPolicy.is_acceptable(&ItemStack::empty()));
}

#[test]
fn pulls_from_slot_up_to_capacity() {
    let mut bundle = food_bundle::new_bundle();
    let mut slot = ContainerSlot::new(item::stack(item::APPLE, 64));
    let mut more = ContainerSlot::new(item::stack(item::APPLE, 10));

    assert!(food_bundle::stacked_on_slot(&mut bundle, &mut slot, &actor()));
    assert!(slot.is_empty());
    assert!(food_bundle::stacked_on_slot(&mut bundle, &mut more, &actor()));
    assert_eq!(more.item().count, 10);

    let contents = food_bundle::contents(&bundle);
    assert_eq!(contents.weight(), Fraction::ONE);
    assert_eq!(contents.get(0).unwrap().count, 64);
}

#[test]
fn one_food_at_a_time() {
    let mut bundle = food_bundle::new_bundle();
    let mut bread = item::stack(item::BREAD, 8);
    let mut apples = item::stack(item::APPLE, 8);

    food_bundle::stacked_on_by(&mut bundle, &mut bread);
    food_bundle::stacked_on_by(&mut bundle, &mut apples);

    assert!(bread.is_empty());
    assert_eq!(apples.count, 8);
    assert_eq!(food_bundle::contents(&bundle).weight(), Fraction::new(8, 32));
}

#[test]
fn empty_slot_receives_front_entry() {
    let mut bundle = food_bundle::new_bundle();
    food_bundle::stacked_on_by(&mut bundle, &mut item::stack(item::RAW_BEEF, 5));

    let mut slot = ContainerSlot::new(ItemStack::empty());
    food_bundle::stacked_on_slot(&mut bundle, &mut slot, &actor());

    assert_eq!(slot.item().item, item::RAW_BEEF);
    assert_eq!(slot.item().count, 5);
    assert!(food_bundle::contents(&bundle).is_empty());
    assert!(bundle.components.bundle.is_none());
}

#[test]
fn empty_cursor_takes_front_entry() {
    let mut bundle = food_bundle::new_bundle();
    food_bundle::stacked_on_by(&mut bundle, &mut item::stack(item::APPLE, 20));

    let mut cursor = ItemStack::empty();
    food_bundle::stacked_on_by(&mut bundle, &mut cursor);
    assert_eq!(cursor.count, 20);
    assert!(food_bundle::contents(&bundle).is_empty());

    // Nothing left: the cursor stays empty.
    let mut cursor = ItemStack::empty();
    food_bundle::stacked_on_by(&mut bundle, &mut cursor);
    assert!(cursor.is_empty());
}

#[test]
fn unstackable_food_fills_the_bundle() {
    let mut bundle = food_bundle::new_bundle();
    let mut cheese = item::stack(item::CHEESE, 1);
    food_bundle::stacked_on_by(&mut bundle, &mut cheese);
    assert!(cheese.is_empty());

    let contents = food_bundle::contents(&bundle);
    assert_eq!(contents.weight(), Fraction::ONE);
    let mut another = item::stack(item::CHEESE, 1);
    food_bundle::stacked_on_by(&mut bundle, &mut another);
    assert_eq!(another.count, 1);
}

#[test]
fn non_bundles_are_ignored() {
    let mut stick = item::stack(item::STICK, 1);
    let mut apples = item::stack(item::APPLE, 3);
    let mut slot = ContainerSlot::new(item::stack(item::APPLE, 3));

    assert!(!food_bundle::stacked_on_by(&mut stick, &mut apples));
    assert!(!food_bundle::stacked_on_slot(&mut stick, &mut slot, &actor()));
    assert_eq!(apples.count, 3);
    assert!(food_bundle::drop_contents(&mut stick).is_empty());
}

#[test]
fn drop_contents_empties_everything() {
    let mut bundle = food_bundle::new_bundle();
    food_bundle::stacked_on_by(&mut bundle, &mut item::stack(item::APPLE, 30));
    let dropped = food_bundle::drop_contents(&mut bundle);
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].count, 30);
    assert!(food_bundle::contents(&bundle).is_empty());
}

#[test]
fn fullness_bar_and_tooltip() {
    let mut bundle = food_bundle::new_bundle();
    let empty = food_bundle::contents(&bundle);
    assert!(!food_bundle::is_bar_visible(&empty));

    food_bundle::stacked_on_by(&mut bundle, &mut item::stack(item::APPLE, 32));
    let half = food_bundle::contents(&bundle);
    assert!(food_bundle::is_bar_visible(&half));
    assert_eq!(food_bundle::fullness_bar(&half), 7);
    assert_eq!(food_bundle::tooltip(&half), vec!["32 x apple".to_string(), "fullness 1/2".to_string()]);

    food_bundle::stacked_on_by(&mut bundle, &mut item::stack(item::APPLE, 32));
    assert_eq!(food_bundle::fullness_bar(&food_bundle::contents(&bundle)), food_bundle::BAR_WIDTH);
}

#[test]
fn locked_slot_is_respected() {
    let mut bundle = food_bundle::new_bundle();
    let mut slot = ContainerSlot::locked(item::stack(item::APPLE, 10));
    food_bundle::stacked_on_slot(&mut bundle, &mut slot, &actor());
    assert_eq!(slot.item().count, 10);
    assert!(food_bundle::contents(&bundle).is_empty());

    food_bundle::stacked_on_slot(&mut bundle, &mut slot, &Actor::creative(7));
    assert!(slot.is_empty());
}
