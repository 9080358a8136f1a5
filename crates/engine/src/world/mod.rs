pub mod block;
pub mod position;
pub mod shape;

use std::collections::HashMap;

use block::BlockId;
use dashmap::DashMap;
use position::{BlockPos, ChunkPos};

/// The block lattice. Thread-safe, lock-sharded by chunk column.
///
/// Storage is sparse: only non-air blocks are kept, and a column whose last
/// block is cleared is dropped. Time and causality live in `causal`, not here.
pub struct World {
    columns: DashMap<ChunkPos, HashMap<BlockPos, BlockId>>,
}

impl World {
    pub fn new() -> Self {
        Self {
            columns: DashMap::new(),
        }
    }

    /// Read a block at an absolute position. Returns AIR where nothing is set.
    pub fn get_block(&self, pos: BlockPos) -> BlockId {
        self.columns
            .get(&pos.chunk())
            .and_then(|column| column.get(&pos).copied())
            .unwrap_or(BlockId::AIR)
    }

    /// Write a block at an absolute position, returning the previous block.
    ///
    /// Takes `&self` because `DashMap` provides interior mutability via
    /// per-shard locking.
    pub fn set_block(&self, pos: BlockPos, block: BlockId) -> BlockId {
        let chunk = pos.chunk();
        if block.is_air() {
            let mut old = BlockId::AIR;
            let mut now_empty = false;
            if let Some(mut column) = self.columns.get_mut(&chunk) {
                old = column.remove(&pos).unwrap_or(BlockId::AIR);
                now_empty = column.is_empty();
            }
            if now_empty {
                self.columns.remove_if(&chunk, |_, column| column.is_empty());
            }
            old
        } else {
            self.columns
                .entry(chunk)
                .or_default()
                .insert(pos, block)
                .unwrap_or(BlockId::AIR)
        }
    }

    /// Number of non-air blocks.
    pub fn block_count(&self) -> usize {
        self.columns.iter().map(|column| column.len()).sum()
    }

    pub fn chunk_count(&self) -> usize {
        self.columns.len()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
