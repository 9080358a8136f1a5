use hearthwood_engine::causal::event::Event;
use hearthwood_engine::inventory::ItemStack;
use hearthwood_engine::world::position::BlockPos;

/// What the host should do after an item or block interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionResult {
    /// Not handled; fall through to default behaviour.
    Pass,
    /// Handled; the swing animation plays.
    Success,
    /// Handled and the held item was used up.
    Consume,
    /// Open the block entity's menu at this position.
    OpenMenu(BlockPos),
}

/// An interaction outcome plus the root events it wants scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub result: InteractionResult,
    pub events: Vec<Event>,
    /// Stacks the host should spawn in the world at the interaction site.
    pub drops: Vec<ItemStack>,
}

impl Interaction {
    pub fn pass() -> Self {
        Self::new(InteractionResult::Pass)
    }

    pub fn new(result: InteractionResult) -> Self {
        Self::with_events(result, Vec::new())
    }

    pub fn with_events(result: InteractionResult, events: Vec<Event>) -> Self {
        Self {
            result,
            events,
            drops: Vec::new(),
        }
    }

    pub fn with_drops(mut self, drops: Vec<ItemStack>) -> Self {
        self.drops = drops;
        self
    }
}
