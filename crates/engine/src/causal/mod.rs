pub mod event;
pub mod graph;
pub mod scheduler;
