use crate::graph::{ArchitectureGraph, GraphEdge};
use crate::layout::{LayoutParams, layout};
use archtally_types::Totals;
use serde::Serialize;
use std::collections::BTreeMap;

/// A node with final coordinates and its measured totals. This is plain
/// data: the report composer reads it without knowing how the coordinates
/// came to be.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedNode {
    pub id: String,
    pub layer: String,
    pub x: f64,
    pub y: f64,
    pub totals: Totals,
}

/// The fully laid-out graph handed to presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionedGraph {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<GraphEdge>,
    /// Column order, including unoccupied layers.
    pub layer_order: Vec<String>,
}

impl PositionedGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Attach coordinates and totals to a filtered graph.
///
/// Totals are looked up by node id and default to zero when absent, so a
/// component declared and measured but empty still renders.
pub fn position_graph(
    graph: &ArchitectureGraph,
    layer_order: &[&str],
    params: &LayoutParams,
    totals_by_id: &BTreeMap<String, Totals>,
) -> PositionedGraph {
    let positions = layout(&graph.nodes, layer_order, params);
    let nodes = graph
        .nodes
        .iter()
        .map(|node| {
            let (x, y) = positions.get(&node.id).copied().unwrap_or((0.0, 0.0));
            PositionedNode {
                id: node.id.clone(),
                layer: node.layer.clone(),
                x,
                y,
                totals: totals_by_id.get(&node.id).copied().unwrap_or_default(),
            }
        })
        .collect();

    PositionedGraph {
        nodes,
        edges: graph.edges.clone(),
        layer_order: layer_order.iter().map(|l| l.to_string()).collect(),
    }
}
