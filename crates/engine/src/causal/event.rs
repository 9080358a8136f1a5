use crate::world::block::BlockId;
use crate::world::position::BlockPos;
use slotmap::new_key_type;

new_key_type! {
    /// Handle for a node in the causal graph.
    pub struct EventId;
}

/// A single, atomic happening in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub payload: EventPayload,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// A block was replaced (placement, collapse, ignition, ...).
    BlockSet {
        pos: BlockPos,
        old: BlockId,
        new: BlockId,
    },

    /// A block should re-check its surroundings after a nearby change.
    BlockNotify { pos: BlockPos },

    /// A block's scheduled tick fired.
    BlockTick { pos: BlockPos },
}

impl Event {
    pub const fn set(pos: BlockPos, old: BlockId, new: BlockId) -> Self {
        Self {
            payload: EventPayload::BlockSet { pos, old, new },
        }
    }

    pub const fn notify(pos: BlockPos) -> Self {
        Self {
            payload: EventPayload::BlockNotify { pos },
        }
    }

    pub const fn tick(pos: BlockPos) -> Self {
        Self {
            payload: EventPayload::BlockTick { pos },
        }
    }

    pub const fn pos(&self) -> BlockPos {
        self.payload.pos()
    }
}

impl EventPayload {
    pub const fn pos(&self) -> BlockPos {
        match self {
            EventPayload::BlockSet { pos, .. }
            | EventPayload::BlockNotify { pos }
            | EventPayload::BlockTick { pos } => *pos,
        }
    }
}
