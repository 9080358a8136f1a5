//! Saving food bundle contents and log pile inventories as gzipped NBT.
//!
//! Only `(item, count, components)` lists are written. Bundle weights are
//! never stored; they are recomputed from the items on load.

use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use hearthwood_engine::inventory::bundle::AnyContent;
use hearthwood_engine::inventory::{BundleContents, Fraction, ItemStack, StackComponents};
use hearthwood_engine::world::position::BlockPos;
use serde::{Deserialize, Serialize};

use crate::block;
use crate::food_bundle::FoodPolicy;
use crate::item;
use crate::log_pile::{LogPileInventory, LogPiles};

/// Format version written into every file.
const DATA_VERSION: i32 = 1;

pub const BUNDLE_FILE: &str = "food_bundle.nbt.gz";
pub const LOG_PILES_FILE: &str = "log_piles.nbt.gz";

// ── NBT structs (serde) ──────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct StackNbt {
    #[serde(rename = "id")]
    id: String,
    #[serde(rename = "count")]
    count: i32,
    #[serde(rename = "components", default, skip_serializing_if = "Option::is_none")]
    components: Option<ComponentsNbt>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
struct ComponentsNbt {
    #[serde(rename = "bundle_contents", default, skip_serializing_if = "Option::is_none")]
    bundle: Option<Vec<StackNbt>>,
    #[serde(rename = "occupants", default, skip_serializing_if = "Option::is_none")]
    occupants: Option<i32>,
    #[serde(rename = "block_state", default, skip_serializing_if = "Option::is_none")]
    block_state: Option<BlockStateNbt>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
struct BlockStateNbt {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Properties", default, skip_serializing_if = "Option::is_none")]
    properties: Option<HashMap<String, String>>,
}

#[derive(Serialize, Deserialize, Debug)]
struct BundleFileNbt {
    #[serde(rename = "DataVersion")]
    data_version: i32,
    #[serde(rename = "Items")]
    items: Vec<StackNbt>,
}

#[derive(Serialize, Deserialize, Debug)]
struct LogPilesFileNbt {
    #[serde(rename = "DataVersion")]
    data_version: i32,
    #[serde(rename = "Piles")]
    piles: Vec<PileNbt>,
}

#[derive(Serialize, Deserialize, Debug)]
struct PileNbt {
    x: i64,
    y: i64,
    z: i64,
    /// One entry per slot, empty slots included, so slot order survives.
    #[serde(rename = "Items")]
    items: Vec<StackNbt>,
}

// ── Conversion ───────────────────────────────────────────────────────────

fn stack_to_nbt(stack: &ItemStack) -> StackNbt {
    if stack.is_empty() {
        return StackNbt {
            id: "hearthwood:empty".into(),
            count: 0,
            components: None,
        };
    }
    let components = if stack.components.is_empty() {
        None
    } else {
        let c = &stack.components;
        Some(ComponentsNbt {
            bundle: c.bundle.as_ref().map(|b| b.items().iter().map(stack_to_nbt).collect()),
            occupants: (c.occupants > 0).then_some(c.occupants as i32),
            block_state: c.block_state.map(|state| {
                let (name, props) = block::describe(state);
                BlockStateNbt {
                    name: format!("hearthwood:{name}"),
                    properties: (!props.is_empty()).then_some(props),
                }
            }),
        })
    };
    StackNbt {
        id: format!("hearthwood:{}", item::name(stack.item)),
        count: stack.count as i32,
        components,
    }
}

/// `None` for empty entries and for items this build does not know.
fn stack_from_nbt(nbt: &StackNbt) -> Option<ItemStack> {
    if nbt.count <= 0 {
        return None;
    }
    let name = nbt.id.strip_prefix("hearthwood:").unwrap_or(&nbt.id);
    let Some(def) = item::by_name(name) else {
        tracing::warn!("Unknown item in save file: {}, skipping", nbt.id);
        return None;
    };

    let mut stack = item::stack(def.id, nbt.count as u32);
    if let Some(c) = &nbt.components {
        stack.components = StackComponents {
            // Nested bundles keep their recorded items; the outer policy
            // decides whether they were allowed in the first place.
            bundle: c
                .bundle
                .as_ref()
                .map(|items| Box::new(BundleContents::new(items.iter().filter_map(stack_from_nbt).collect(), &AnyContent))),
            occupants: c.occupants.unwrap_or(0).max(0) as u32,
            block_state: c.block_state.as_ref().and_then(block_state_from_nbt),
        };
    }
    Some(stack)
}

fn block_state_from_nbt(nbt: &BlockStateNbt) -> Option<hearthwood_engine::world::block::BlockId> {
    let name = nbt.name.strip_prefix("hearthwood:").unwrap_or(&nbt.name);
    let props = nbt.properties.clone().unwrap_or_default();
    let state = block::from_description(name, &props);
    if state.is_none() {
        tracing::warn!("Unknown block state in save file: {}, dropping it", nbt.name);
    }
    state
}

// ── Gzip + NBT framing ───────────────────────────────────────────────────

fn to_gzipped_nbt<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let raw = fastnbt::to_bytes(value).context("NBT serialization failed")?;
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&raw).context("gzip compression failed")?;
    encoder.finish().context("gzip compression failed")
}

fn from_gzipped_nbt<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> Result<T> {
    let mut raw = Vec::new();
    GzDecoder::new(bytes)
        .read_to_end(&mut raw)
        .context("gzip decompression failed")?;
    fastnbt::from_bytes(&raw).context("NBT deserialization failed")
}

// ── Food bundles ─────────────────────────────────────────────────────────

pub fn encode_bundle(contents: &BundleContents) -> Result<Vec<u8>> {
    to_gzipped_nbt(&BundleFileNbt {
        data_version: DATA_VERSION,
        items: contents.items().iter().map(stack_to_nbt).collect(),
    })
}

/// Decode a food bundle and recompute its weight.
pub fn decode_bundle(bytes: &[u8]) -> Result<BundleContents> {
    let file: BundleFileNbt = from_gzipped_nbt(bytes)?;
    if file.data_version != DATA_VERSION {
        tracing::warn!("Bundle data version {} differs from {}", file.data_version, DATA_VERSION);
    }
    let items: Vec<ItemStack> = file.items.iter().filter_map(stack_from_nbt).collect();
    if items.iter().any(|s| s.item != items[0].item) {
        tracing::warn!("Bundle file mixes item types; loading as-is");
    }
    let contents = BundleContents::new(items, &FoodPolicy);
    if contents.weight() > Fraction::ONE {
        tracing::warn!("Bundle file is over capacity: weight {}", contents.weight());
    }
    Ok(contents)
}

pub fn save_bundle(contents: &BundleContents, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(BUNDLE_FILE);
    fs::write(&path, encode_bundle(contents)?).with_context(|| format!("Failed to write {}", path.display()))
}

/// Returns `None` when no bundle has been saved in `dir`.
pub fn load_bundle(dir: &Path) -> Result<Option<BundleContents>> {
    let path = dir.join(BUNDLE_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    decode_bundle(&bytes).map(Some)
}

// ── Log piles ────────────────────────────────────────────────────────────

pub fn encode_log_piles(piles: &LogPiles) -> Result<Vec<u8>> {
    let piles = piles
        .positions()
        .into_iter()
        .filter_map(|pos| {
            let inventory = piles.get(pos)?;
            Some(PileNbt {
                x: pos.x,
                y: pos.y,
                z: pos.z,
                items: inventory.slots().iter().map(stack_to_nbt).collect(),
            })
        })
        .collect();
    to_gzipped_nbt(&LogPilesFileNbt {
        data_version: DATA_VERSION,
        piles,
    })
}

/// Decode into `piles`, replacing inventories at the same positions.
/// Returns how many piles were loaded.
pub fn decode_log_piles_into(piles: &LogPiles, bytes: &[u8]) -> Result<usize> {
    let file: LogPilesFileNbt = from_gzipped_nbt(bytes)?;
    let count = file.piles.len();
    for pile in file.piles {
        let mut inventory = LogPileInventory::new();
        for (i, stack) in pile.items.iter().enumerate() {
            if let Some(stack) = stack_from_nbt(stack) {
                inventory.set_slot(i, stack);
            }
        }
        piles.insert(BlockPos::new(pile.x, pile.y, pile.z), inventory);
    }
    Ok(count)
}

pub fn save_log_piles(piles: &LogPiles, dir: &Path) -> Result<usize> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(LOG_PILES_FILE);
    fs::write(&path, encode_log_piles(piles)?).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(piles.len())
}

pub fn load_log_piles_into(piles: &LogPiles, dir: &Path) -> Result<usize> {
    let path = dir.join(LOG_PILES_FILE);
    if !path.exists() {
        return Ok(0);
    }
    let bytes = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    decode_log_piles_into(piles, &bytes)
}
