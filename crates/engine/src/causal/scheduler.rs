use super::event::EventPayload;
use super::graph::CausalGraph;
use crate::rules::RuleSet;
use crate::world::World;

/// Drains the causal frontier on the calling thread: applies each event to
/// the world, then asks the rule set for consequences.
pub struct Scheduler {
    pub max_events_per_step: usize,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            max_events_per_step: 10_000,
        }
    }

    /// Execute one frontier's worth of events. Returns how many ran.
    pub fn step(&self, world: &World, graph: &mut CausalGraph, rules: &RuleSet) -> usize {
        let mut executed = 0;
        for id in graph.frontier().into_iter().take(self.max_events_per_step) {
            let payload = match graph.get(id) {
                Some(node) => node.event.payload.clone(),
                None => continue,
            };

            apply(world, &payload);
            graph.mark_executed(id);
            executed += 1;

            for consequent in rules.evaluate(world, &payload) {
                graph.insert(consequent, vec![id]);
            }
        }
        executed
    }

    /// Step until nothing is left to run or `max_steps` is exhausted.
    pub fn run_until_quiet(&self, world: &World, graph: &mut CausalGraph, rules: &RuleSet, max_steps: usize) -> usize {
        let mut total = 0;
        for _ in 0..max_steps {
            let n = self.step(world, graph, rules);
            if n == 0 {
                return total;
            }
            total += n;
        }
        tracing::warn!("cascade still active after {} steps ({} events)", max_steps, total);
        total
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(world: &World, payload: &EventPayload) {
    if let EventPayload::BlockSet { pos, new, .. } = payload {
        world.set_block(*pos, *new);
    }
}
