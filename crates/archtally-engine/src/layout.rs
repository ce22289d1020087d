use crate::graph::GraphNode;
use std::collections::BTreeMap;

/// Spacing knobs for the layered layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// Horizontal distance between layer columns.
    pub column_spacing: f64,
    /// Vertical distance between stacked nodes within a column.
    pub row_spacing: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            column_spacing: 3.1,
            row_spacing: 1.25,
        }
    }
}

/// Deterministic layered layout.
///
/// Each layer becomes a column at `x = index * column_spacing`, counting
/// every layer in `layer_order` whether occupied or not, so a column keeps
/// its place as the measured set changes. Within a column, nodes stack
/// top to bottom in input order, centered on `y = 0`: the first node sits
/// at `+(k-1) * row_spacing / 2`, each following node one `row_spacing`
/// lower. No hash order, clock or randomness is consulted, so identical
/// input gives bit-identical coordinates.
pub fn layout(
    nodes: &[GraphNode],
    layer_order: &[&str],
    params: &LayoutParams,
) -> BTreeMap<String, (f64, f64)> {
    let mut positions = BTreeMap::new();
    for (column, layer) in layer_order.iter().enumerate() {
        let stack: Vec<&GraphNode> = nodes.iter().filter(|n| n.layer == *layer).collect();
        if stack.is_empty() {
            continue;
        }
        let x = column as f64 * params.column_spacing;
        let top = (stack.len() - 1) as f64 * params.row_spacing / 2.0;
        for (row, node) in stack.iter().enumerate() {
            let y = top - row as f64 * params.row_spacing;
            positions.insert(node.id.clone(), (x, y));
        }
    }
    positions
}
