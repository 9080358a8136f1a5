//! The empty pan scoops a block of loose sediment out of the world and
//! becomes a filled pan remembering what it scooped.

use hearthwood_engine::causal::event::Event;
use hearthwood_engine::inventory::{ItemStack, StackComponents};
use hearthwood_engine::world::World;
use hearthwood_engine::world::block::BlockId;
use hearthwood_engine::world::position::BlockPos;

use crate::block;
use crate::interaction::{Interaction, InteractionResult};
use crate::item;
use crate::player::Player;

/// A filled pan holding `state`.
pub fn fill(state: BlockId) -> ItemStack {
    item::stack(item::FILLED_PAN, 1).with_components(StackComponents {
        block_state: Some(state),
        ..Default::default()
    })
}

/// The block a filled pan is carrying.
pub fn panned_state(stack: &ItemStack) -> Option<BlockId> {
    if stack.is(item::FILLED_PAN) {
        stack.components.block_state
    } else {
        None
    }
}

/// Use the pan in `hand` on the block at `pos`.
///
/// The block is removed without drops (via the returned event), one pan is
/// used up unless the player is in creative, and the filled pan goes to the
/// inventory or is dropped when there is no room.
pub fn use_on(world: &World, pos: BlockPos, player: &mut Player, hand: &mut ItemStack) -> Interaction {
    if !hand.is(item::EMPTY_PAN) {
        return Interaction::pass();
    }
    let state = world.get_block(pos);
    if !block::can_be_panned(state) {
        return Interaction::pass();
    }

    if !player.is_creative() {
        hand.shrink(1);
    }
    player.award_item_used(item::EMPTY_PAN);

    let mut filled = fill(state);
    if !player.add(&mut filled) {
        player.drop_stack(filled);
    }
    tracing::debug!(?pos, state = state.0, "panned block");

    Interaction::with_events(InteractionResult::Consume, vec![Event::set(pos, state, block::AIR)])
}
