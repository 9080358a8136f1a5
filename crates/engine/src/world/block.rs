/// Opaque block state identifier. The engine never interprets these beyond
/// `BlockId::AIR`; content crates give every other value its meaning
/// (including any per-state properties packed into the number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BlockId(pub u16);

impl BlockId {
    /// The universal "empty" block. Unset positions read back as AIR.
    pub const AIR: BlockId = BlockId(0);

    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub const fn is_air(self) -> bool {
        self.0 == 0
    }
}
