//! Causal graph and scheduler mechanics with opaque block values and toy
//! rules; no game content involved.

use hearthwood_engine::causal::event::{Event, EventPayload};
use hearthwood_engine::causal::graph::CausalGraph;
use hearthwood_engine::causal::scheduler::Scheduler;
use hearthwood_engine::rules::RuleSet;
use hearthwood_engine::world::World;
use hearthwood_engine::world::block::BlockId;
use hearthwood_engine::world::position::BlockPos;

const MARKER: BlockId = BlockId(7);

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

#[test]
fn frontier_respects_dependencies() {
    let mut g = CausalGraph::new();
    let a = g.insert_root(Event::notify(BlockPos::new(0, 0, 0)));
    let b = g.insert(Event::notify(BlockPos::new(1, 0, 0)), vec![a]);

    assert_eq!(g.frontier(), vec![a]);
    g.mark_executed(a);
    assert_eq!(g.frontier(), vec![b]);
    assert_eq!(g.get(a).unwrap().children, vec![b]);
}

#[test]
fn diamond_join_waits_for_both_parents() {
    let mut g = CausalGraph::new();
    let root = g.insert_root(Event::notify(BlockPos::new(0, 0, 0)));
    let left = g.insert(Event::notify(BlockPos::new(1, 0, 0)), vec![root]);
    let right = g.insert(Event::notify(BlockPos::new(2, 0, 0)), vec![root]);
    let join = g.insert(Event::notify(BlockPos::new(3, 0, 0)), vec![left, right]);

    g.mark_executed(root);
    g.mark_executed(left);
    assert_eq!(g.frontier(), vec![right]);
    g.mark_executed(right);
    assert_eq!(g.frontier(), vec![join]);
}

#[test]
fn dot_export_lists_edges() {
    let mut g = CausalGraph::new();
    let a = g.insert_root(Event::set(BlockPos::new(0, 5, 0), BlockId::AIR, MARKER));
    g.insert(Event::tick(BlockPos::new(0, 5, 0)), vec![a]);

    let dot = g.to_dot();
    assert!(dot.starts_with("digraph causal {"));
    assert!(dot.ends_with("}\n"));
    assert!(dot.contains("->"));
    assert!(dot.contains("Tick (0,5,0)"));
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Toy rule: a marker placed above y=0 falls one block per event.
fn fall(world: &World, payload: &EventPayload) -> Vec<Event> {
    match payload {
        EventPayload::BlockSet { pos, new, .. } if *new == MARKER && pos.y > 0 => {
            let below = pos.below();
            if world.get_block(below).is_air() {
                return vec![Event::set(*pos, MARKER, BlockId::AIR), Event::set(below, BlockId::AIR, MARKER)];
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

#[test]
fn cascade_runs_to_quiescence() {
    let world = World::new();
    let mut graph = CausalGraph::new();
    let mut rules = RuleSet::new();
    rules.add(fall);

    graph.insert_root(Event::set(BlockPos::new(3, 4, 3), BlockId::AIR, MARKER));
    let total = Scheduler::new().run_until_quiet(&world, &mut graph, &rules, 100);

    assert_eq!(world.get_block(BlockPos::new(3, 0, 3)), MARKER);
    assert_eq!(world.block_count(), 1);
    assert_eq!(total, graph.executed_count());
    assert_eq!(graph.executed_sets().len(), 9);
}

#[test]
fn empty_rule_set_is_quiescent() {
    let world = World::new();
    let mut graph = CausalGraph::new();
    let total = Scheduler::new().run_until_quiet(&world, &mut graph, &RuleSet::new(), 10);
    assert_eq!(total, 0);
}

#[test]
fn ticks_and_notifies_do_not_touch_the_world() {
    let world = World::new();
    let mut graph = CausalGraph::new();
    graph.insert_root(Event::tick(BlockPos::new(0, 0, 0)));
    graph.insert_root(Event::notify(BlockPos::new(0, 1, 0)));

    let total = Scheduler::new().run_until_quiet(&world, &mut graph, &RuleSet::new(), 10);
    assert_eq!(total, 2);
    assert_eq!(world.block_count(), 0);
}

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

#[test]
fn world_is_sparse() {
    let world = World::new();
    let pos = BlockPos::new(-17, 3, 40);
    assert_eq!(world.set_block(pos, MARKER), BlockId::AIR);
    assert_eq!(world.get_block(pos), MARKER);
    assert_eq!(world.chunk_count(), 1);

    assert_eq!(world.set_block(pos, BlockId::AIR), MARKER);
    assert_eq!(world.chunk_count(), 0);
    assert_eq!(world.get_block(pos), BlockId::AIR);
}
