use super::event::{Event, EventId, EventPayload};
use slotmap::SlotMap;

#[derive(Debug)]
pub struct EventNode {
    pub event: Event,
    pub parents: Vec<EventId>,
    pub children: Vec<EventId>,
    pub executed: bool,
}

/// Append-only DAG of events.
///
/// Invariant: a parent's world write is visible before any of its children
/// execute. Events with no ancestry between them may run in any order.
pub struct CausalGraph {
    nodes: SlotMap<EventId, EventNode>,
}

impl CausalGraph {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    pub fn insert(&mut self, event: Event, parents: Vec<EventId>) -> EventId {
        let id = self.nodes.insert(EventNode {
            event,
            parents: Vec::new(),
            children: Vec::new(),
            executed: false,
        });
        for &parent in &parents {
            if let Some(node) = self.nodes.get_mut(parent) {
                node.children.push(id);
            }
        }
        self.nodes[id].parents = parents;
        id
    }

    pub fn insert_root(&mut self, event: Event) -> EventId {
        self.insert(event, Vec::new())
    }

    /// Unexecuted events whose parents have all executed, in insertion order.
    pub fn frontier(&self) -> Vec<EventId> {
        let mut ready: Vec<EventId> = self
            .nodes
            .iter()
            .filter(|(_, node)| !node.executed && self.parents_done(node))
            .map(|(id, _)| id)
            .collect();
        // Slot keys are reused after removal; we never remove, so key order is
        // insertion order and a plain sort keeps cascades deterministic.
        ready.sort();
        ready
    }

    fn parents_done(&self, node: &EventNode) -> bool {
        node.parents
            .iter()
            .all(|p| self.nodes.get(*p).is_some_and(|n| n.executed))
    }

    pub fn mark_executed(&mut self, id: EventId) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.executed = true;
        }
    }

    pub fn get(&self, id: EventId) -> Option<&EventNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn executed_count(&self) -> usize {
        self.nodes.values().filter(|n| n.executed).count()
    }

    /// Executed `BlockSet` payloads, in insertion order.
    pub fn executed_sets(&self) -> Vec<&EventPayload> {
        let mut nodes: Vec<_> = self
            .nodes
            .iter()
            .filter(|(_, n)| n.executed && matches!(n.event.payload, EventPayload::BlockSet { .. }))
            .collect();
        nodes.sort_by_key(|(id, _)| *id);
        nodes.into_iter().map(|(_, n)| &n.event.payload).collect()
    }

    /// Graphviz DOT rendering, for eyeballing a cascade.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph causal {\n  rankdir=BT;\n  node [shape=box, fontname=\"monospace\"];\n");
        for (id, node) in &self.nodes {
            let p = node.event.pos();
            let label = match &node.event.payload {
                EventPayload::BlockSet { old, new, .. } => {
                    format!("Set ({},{},{})\\n{} -> {}", p.x, p.y, p.z, old.0, new.0)
                }
                EventPayload::BlockNotify { .. } => format!("Notify ({},{},{})", p.x, p.y, p.z),
                EventPayload::BlockTick { .. } => format!("Tick ({},{},{})", p.x, p.y, p.z),
            };
            let style = if node.executed { "solid" } else { "dashed" };
            out.push_str(&format!("  \"{id:?}\" [label=\"{label}\", style={style}];\n"));
            for parent in &node.parents {
                out.push_str(&format!("  \"{parent:?}\" -> \"{id:?}\";\n"));
            }
        }
        out.push_str("}\n");
        out
    }
}

impl Default for CausalGraph {
    fn default() -> Self {
        Self::new()
    }
}
