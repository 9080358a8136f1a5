pub mod log_pile;

use hearthwood_engine::causal::event::Event;
use hearthwood_engine::causal::graph::CausalGraph;
use hearthwood_engine::causal::scheduler::Scheduler;
use hearthwood_engine::rules::RuleSet;
use hearthwood_engine::world::World;

/// Steps allowed per cascade before it is cut off.
pub const MAX_CASCADE_STEPS: usize = 1000;

/// The standard content rule set: log pile support and ignition.
pub fn standard() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.add(log_pile::support);
    rules.add(log_pile::ignition);
    rules
}

/// Run `roots` and everything they cause against `world` with the standard
/// rules, on a fresh graph. The executed graph is returned for inspection.
pub fn run_cascade(world: &World, roots: Vec<Event>) -> CausalGraph {
    let mut graph = CausalGraph::new();
    for event in roots {
        graph.insert_root(event);
    }
    let executed = Scheduler::new().run_until_quiet(world, &mut graph, &standard(), MAX_CASCADE_STEPS);
    tracing::debug!("cascade settled: {} events executed, {} block changes", executed, graph.executed_sets().len());
    graph
}
