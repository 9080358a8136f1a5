//! Block state IDs and the tags content code checks against.
//!
//! Plain blocks have one state each. Log piles pack their two properties
//! (horizontal axis, log count 1..=16) into a contiguous range of IDs so the
//! engine can store them as ordinary `BlockId`s.

use std::collections::HashMap;

use hearthwood_engine::world::block::BlockId;
use hearthwood_engine::world::position::Axis;

pub const AIR: BlockId = BlockId::AIR;
pub const STONE: BlockId = BlockId(1);
pub const DIRT: BlockId = BlockId(2);
pub const GRAVEL: BlockId = BlockId(3);
pub const SAND: BlockId = BlockId(4);
pub const FIRE: BlockId = BlockId(5);
pub const BURNING_LOG_PILE: BlockId = BlockId(6);

/// First log pile state: axis X, count 1.
const LOG_PILE_BASE: u16 = 100;
/// Maximum logs shown by a single log pile block.
pub const LOG_PILE_MAX_COUNT: u8 = 16;
const LOG_PILE_STATES: u16 = 2 * LOG_PILE_MAX_COUNT as u16;

/// Decoded properties of a log pile block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogPileState {
    /// Always `Axis::X` or `Axis::Z`.
    pub axis: Axis,
    /// 1..=16
    pub count: u8,
}

/// The log pile state for `axis` and `count`. `Axis::Y` is not a valid pile
/// axis and maps to X; `count` is clamped into 1..=16.
pub fn log_pile(axis: Axis, count: u8) -> BlockId {
    let axis_index = match axis {
        Axis::Z => 1,
        Axis::X | Axis::Y => 0,
    };
    let count = count.clamp(1, LOG_PILE_MAX_COUNT) as u16;
    BlockId(LOG_PILE_BASE + axis_index * LOG_PILE_MAX_COUNT as u16 + (count - 1))
}

pub fn log_pile_state(id: BlockId) -> Option<LogPileState> {
    let offset = id.0.checked_sub(LOG_PILE_BASE).filter(|o| *o < LOG_PILE_STATES)?;
    let axis = if offset / LOG_PILE_MAX_COUNT as u16 == 0 { Axis::X } else { Axis::Z };
    let count = (offset % LOG_PILE_MAX_COUNT as u16) as u8 + 1;
    Some(LogPileState { axis, count })
}

pub fn is_log_pile(id: BlockId) -> bool {
    log_pile_state(id).is_some()
}

pub fn is_fire(id: BlockId) -> bool {
    id == FIRE
}

/// Loose sediment a pan can scoop up.
pub fn can_be_panned(id: BlockId) -> bool {
    id == GRAVEL || id == SAND
}

/// Can something rest on top of this block?
pub fn is_face_sturdy_up(id: BlockId) -> bool {
    matches!(id, STONE | DIRT | GRAVEL | SAND | BURNING_LOG_PILE)
}

pub fn is_replaceable(id: BlockId) -> bool {
    id == AIR || id == FIRE
}

/// Registry name plus state properties, as written into save files.
pub fn describe(id: BlockId) -> (&'static str, HashMap<String, String>) {
    if let Some(state) = log_pile_state(id) {
        let axis = if state.axis == Axis::Z { "z" } else { "x" };
        let props = HashMap::from([
            ("axis".to_string(), axis.to_string()),
            ("count".to_string(), state.count.to_string()),
        ]);
        return ("log_pile", props);
    }
    let name = match id {
        STONE => "stone",
        DIRT => "dirt",
        GRAVEL => "gravel",
        SAND => "sand",
        FIRE => "fire",
        BURNING_LOG_PILE => "burning_log_pile",
        _ => "air",
    };
    (name, HashMap::new())
}

/// Inverse of [`describe`]. Unknown names and malformed properties give `None`.
pub fn from_description(name: &str, props: &HashMap<String, String>) -> Option<BlockId> {
    match name {
        "air" => Some(AIR),
        "stone" => Some(STONE),
        "dirt" => Some(DIRT),
        "gravel" => Some(GRAVEL),
        "sand" => Some(SAND),
        "fire" => Some(FIRE),
        "burning_log_pile" => Some(BURNING_LOG_PILE),
        "log_pile" => {
            let axis = match props.get("axis").map(String::as_str) {
                Some("x") => Axis::X,
                Some("z") => Axis::Z,
                _ => return None,
            };
            let count: u8 = props.get("count")?.parse().ok()?;
            (1..=LOG_PILE_MAX_COUNT).contains(&count).then(|| log_pile(axis, count))
        }
        _ => None,
    }
}
