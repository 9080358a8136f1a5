//! Item stacks and containers whose capacity is measured as a fraction of
//! "full" rather than in slots.

pub mod bundle;
pub mod fraction;
pub mod slot;
pub mod stack;

pub use bundle::{BundleContents, BundleContentsMut, ContentPolicy};
pub use fraction::Fraction;
pub use slot::{Actor, ContainerSlot, Slot};
pub use stack::{ItemId, ItemStack, StackComponents};
