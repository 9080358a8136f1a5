//! Item registry: identities, stack sizes, and tags.

use hearthwood_engine::inventory::{ItemId, ItemStack};

pub const OAK_LOG: ItemId = ItemId(1);
pub const BIRCH_LOG: ItemId = ItemId(2);
pub const STICK: ItemId = ItemId(3);
pub const APPLE: ItemId = ItemId(10);
pub const BREAD: ItemId = ItemId(11);
pub const RAW_BEEF: ItemId = ItemId(12);
pub const CHEESE: ItemId = ItemId(13);
pub const FOOD_BUNDLE: ItemId = ItemId(20);
pub const EMPTY_PAN: ItemId = ItemId(30);
pub const FILLED_PAN: ItemId = ItemId(31);
pub const BEE_NEST: ItemId = ItemId(40);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Anything a food bundle will take.
    Foods,
    /// Logs that can be stacked into a log pile.
    LogPileLogs,
}

#[derive(Debug)]
pub struct ItemDef {
    pub id: ItemId,
    pub name: &'static str,
    pub max_stack_size: u32,
    /// False for items that must never end up inside another container.
    pub fits_inside_containers: bool,
    pub tags: &'static [Tag],
}

const fn def(id: ItemId, name: &'static str, max_stack_size: u32, tags: &'static [Tag]) -> ItemDef {
    ItemDef {
        id,
        name,
        max_stack_size,
        fits_inside_containers: true,
        tags,
    }
}

static ITEMS: &[ItemDef] = &[
    def(OAK_LOG, "oak_log", 64, &[Tag::LogPileLogs]),
    def(BIRCH_LOG, "birch_log", 64, &[Tag::LogPileLogs]),
    def(STICK, "stick", 64, &[]),
    def(APPLE, "apple", 64, &[Tag::Foods]),
    def(BREAD, "bread", 32, &[Tag::Foods]),
    def(RAW_BEEF, "raw_beef", 16, &[Tag::Foods]),
    // Cheese wheels do not stack and take the whole bundle.
    def(CHEESE, "cheese", 1, &[Tag::Foods]),
    ItemDef {
        fits_inside_containers: false,
        ..def(FOOD_BUNDLE, "food_bundle", 1, &[])
    },
    def(EMPTY_PAN, "empty_pan", 16, &[]),
    def(FILLED_PAN, "filled_pan", 1, &[]),
    def(BEE_NEST, "bee_nest", 1, &[]),
];

pub fn get(id: ItemId) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|d| d.id == id)
}

pub fn by_name(name: &str) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|d| d.name == name)
}

pub fn name(id: ItemId) -> &'static str {
    get(id).map_or("unknown", |d| d.name)
}

pub fn has_tag(id: ItemId, tag: Tag) -> bool {
    get(id).is_some_and(|d| d.tags.contains(&tag))
}

pub fn fits_inside_containers(id: ItemId) -> bool {
    get(id).is_some_and(|d| d.fits_inside_containers)
}

/// A fresh stack with the registry's stack size. Unknown items get an empty stack.
pub fn stack(id: ItemId, count: u32) -> ItemStack {
    match get(id) {
        Some(d) => ItemStack::new(id, count, d.max_stack_size),
        None => ItemStack::empty(),
    }
}
