pub mod block;
pub mod food_bundle;
pub mod interaction;
pub mod item;
pub mod log_pile;
pub mod pan;
pub mod persistence;
pub mod player;
pub mod rules;
