pub mod causal;
pub mod inventory;
pub mod rules;
pub mod world;
