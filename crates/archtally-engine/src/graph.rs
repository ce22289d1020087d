use archtally_types::Topology;
use serde::Serialize;
use std::collections::HashSet;

/// A component retained for rendering: declared in the topology and
/// actually measured in this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub layer: String,
}

/// A dependency between two retained components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// The filtered architecture graph.
///
/// Node order is layer declaration order, then member declaration order
/// within each layer. Edge order follows the candidate list. Both are
/// stable for a given topology and measured set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchitectureGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ArchitectureGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Intersect the fixed topology with the measured set.
///
/// Members that were not measured this run are dropped, and an edge
/// survives only when both endpoints did. An empty result is a valid
/// graph, not an error; the caller decides how to present it.
pub fn build_graph(existing: &HashSet<String>, topology: &Topology) -> ArchitectureGraph {
    let mut nodes = Vec::new();
    for layer in &topology.layers {
        for member in &layer.members {
            if existing.contains(member) {
                nodes.push(GraphNode {
                    id: member.clone(),
                    layer: layer.name.clone(),
                });
            }
        }
    }

    let retained: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let edges = topology
        .edges
        .iter()
        .filter(|e| retained.contains(e.from.as_str()) && retained.contains(e.to.as_str()))
        .map(|e| GraphEdge {
            from: e.from.clone(),
            to: e.to.clone(),
        })
        .collect();

    ArchitectureGraph { nodes, edges }
}
