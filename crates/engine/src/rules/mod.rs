use crate::causal::event::{Event, EventPayload};
use crate::world::World;

/// A rule: given the world and an event that just executed, produce the
/// consequent events.
///
/// Rules only read a bounded neighbourhood of the event position.
pub type RuleFn = fn(&World, &EventPayload) -> Vec<Event>;

/// Ordered collection of rules; every rule sees every event.
pub struct RuleSet {
    rules: Vec<RuleFn>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add(&mut self, rule: RuleFn) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn evaluate(&self, world: &World, payload: &EventPayload) -> Vec<Event> {
        self.rules.iter().flat_map(|rule| rule(world, payload)).collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}
