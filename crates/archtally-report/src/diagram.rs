use crate::plotly::Figure;
use archtally_engine::PositionedGraph;
use archtally_types::util::fmt_count;
use serde_json::{Value, json};

// Box dimensions in plot coordinates.
const BOX_W: f64 = 1.45;
const BOX_H: f64 = 0.62;

// Soft layer tints, cycled by column.
const LAYER_TINTS: [&str; 6] = [
    "rgba(232, 244, 255, 0.95)",
    "rgba(236, 255, 244, 0.95)",
    "rgba(255, 246, 230, 0.95)",
    "rgba(255, 235, 238, 0.95)",
    "rgba(245, 239, 255, 0.95)",
    "rgba(245, 245, 245, 0.95)",
];

/// Render the positioned graph as a layered flow diagram.
///
/// Boxes and labels are static shapes and annotations; hover metrics ride
/// on an invisible scatter trace because shapes have no hover of their own.
/// Arrows connect box edges, not centers, so they never pierce a box.
pub fn architecture_figure(graph: &PositionedGraph) -> Figure {
    let mut shapes: Vec<Value> = Vec::new();
    let mut annotations: Vec<Value> = Vec::new();

    for node in &graph.nodes {
        let column = graph
            .layer_order
            .iter()
            .position(|layer| *layer == node.layer)
            .unwrap_or(0);
        shapes.push(json!({
            "type": "rect",
            "xref": "x",
            "yref": "y",
            "x0": node.x - BOX_W / 2.0,
            "x1": node.x + BOX_W / 2.0,
            "y0": node.y - BOX_H / 2.0,
            "y1": node.y + BOX_H / 2.0,
            "line": {"width": 1},
            "fillcolor": LAYER_TINTS[column % LAYER_TINTS.len()],
            "layer": "below",
        }));
        annotations.push(json!({
            "x": node.x,
            "y": node.y + 0.08,
            "xref": "x",
            "yref": "y",
            "text": format!("<b>{}</b>", node.id),
            "showarrow": false,
            "font": {"size": 12},
        }));
        annotations.push(json!({
            "x": node.x,
            "y": node.y - 0.20,
            "xref": "x",
            "yref": "y",
            "text": format!("{} LOC", fmt_count(node.totals.code)),
            "showarrow": false,
            "font": {"size": 10, "color": "#555"},
        }));
    }

    // Layer headings above the tallest stack, one per occupied column.
    let y_top = graph
        .nodes
        .iter()
        .map(|n| n.y)
        .fold(f64::MIN, f64::max);
    let y_top = if graph.nodes.is_empty() { 2.0 } else { y_top + 1.15 };
    for layer in &graph.layer_order {
        let xs: Vec<f64> = graph
            .nodes
            .iter()
            .filter(|n| n.layer == *layer)
            .map(|n| n.x)
            .collect();
        if xs.is_empty() {
            continue;
        }
        let x = xs.iter().sum::<f64>() / xs.len() as f64;
        annotations.push(json!({
            "x": x,
            "y": y_top,
            "xref": "x",
            "yref": "y",
            "text": format!("<b>{}</b>", layer),
            "showarrow": false,
            "font": {"size": 13},
        }));
    }

    // Edges as arrow annotations between facing box edges.
    for edge in &graph.edges {
        let Some(from) = graph.nodes.iter().find(|n| n.id == edge.from) else {
            continue;
        };
        let Some(to) = graph.nodes.iter().find(|n| n.id == edge.to) else {
            continue;
        };
        annotations.push(json!({
            "x": to.x - BOX_W / 2.0,
            "y": to.y,
            "ax": from.x + BOX_W / 2.0,
            "ay": from.y,
            "xref": "x",
            "yref": "y",
            "axref": "x",
            "ayref": "y",
            "showarrow": true,
            "arrowhead": 3,
            "arrowsize": 1.0,
            "arrowwidth": 1,
            "opacity": 0.85,
            "text": "",
        }));
    }

    // Invisible markers carry the hover tooltips.
    let hover: Vec<String> = graph
        .nodes
        .iter()
        .map(|n| {
            format!(
                "<b>{}</b><br>Layer: {}<br>Files: {}<br>Blank: {}<br>Comment: {}<br>Code: {}",
                n.id,
                n.layer,
                fmt_count(n.totals.files),
                fmt_count(n.totals.blank),
                fmt_count(n.totals.comment),
                fmt_count(n.totals.code),
            )
        })
        .collect();
    let xs: Vec<f64> = graph.nodes.iter().map(|n| n.x).collect();
    let ys: Vec<f64> = graph.nodes.iter().map(|n| n.y).collect();

    Figure {
        data: vec![json!({
            "type": "scatter",
            "x": xs,
            "y": ys,
            "mode": "markers",
            "marker": {"size": 18, "opacity": 0.01},
            "hovertext": hover,
            "hoverinfo": "text",
            "showlegend": false,
        })],
        layout: json!({
            "title": "Architecture (layered flow)",
            "shapes": shapes,
            "annotations": annotations,
            "xaxis": {"showgrid": false, "zeroline": false, "showticklabels": false},
            "yaxis": {"showgrid": false, "zeroline": false, "showticklabels": false},
            "margin": {"l": 20, "r": 20, "t": 70, "b": 20},
            "height": 600,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archtally_engine::{GraphEdge, PositionedNode};
    use archtally_types::Totals;

    fn graph() -> PositionedGraph {
        PositionedGraph {
            nodes: vec![
                PositionedNode {
                    id: "web".to_string(),
                    layer: "front".to_string(),
                    x: 0.0,
                    y: 0.0,
                    totals: Totals::new(10, 100, 50, 1500),
                },
                PositionedNode {
                    id: "api".to_string(),
                    layer: "back".to_string(),
                    x: 3.1,
                    y: 0.0,
                    totals: Totals::new(5, 40, 20, 800),
                },
            ],
            edges: vec![GraphEdge {
                from: "web".to_string(),
                to: "api".to_string(),
            }],
            layer_order: vec!["front".to_string(), "back".to_string()],
        }
    }

    #[test]
    fn test_one_box_two_labels_per_node() {
        let figure = architecture_figure(&graph());
        let shapes = figure.layout["shapes"].as_array().unwrap();
        assert_eq!(shapes.len(), 2);

        // 2 labels per node + 2 layer headings + 1 arrow
        let annotations = figure.layout["annotations"].as_array().unwrap();
        assert_eq!(annotations.len(), 7);
    }

    #[test]
    fn test_boxes_are_centered_on_node_positions() {
        let figure = architecture_figure(&graph());
        let first = &figure.layout["shapes"][0];
        assert_eq!(first["x0"], -BOX_W / 2.0);
        assert_eq!(first["x1"], BOX_W / 2.0);
        assert_eq!(first["y0"], -BOX_H / 2.0);
        assert_eq!(first["y1"], BOX_H / 2.0);
    }

    #[test]
    fn test_arrow_spans_between_box_edges() {
        let figure = architecture_figure(&graph());
        let annotations = figure.layout["annotations"].as_array().unwrap();
        let arrow = annotations
            .iter()
            .find(|a| a["showarrow"] == true)
            .unwrap();
        assert_eq!(arrow["ax"], BOX_W / 2.0);
        assert_eq!(arrow["x"], 3.1 - BOX_W / 2.0);
        assert_eq!(arrow["arrowhead"], 3);
    }

    #[test]
    fn test_hover_text_groups_digits() {
        let figure = architecture_figure(&graph());
        let hover = figure.data[0]["hovertext"][0].as_str().unwrap();
        assert!(hover.contains("<b>web</b>"));
        assert!(hover.contains("Layer: front"));
        assert!(hover.contains("Code: 1,500"));
    }

    #[test]
    fn test_empty_graph_still_renders_a_figure() {
        let figure = architecture_figure(&PositionedGraph::default());
        assert_eq!(figure.layout["shapes"].as_array().unwrap().len(), 0);
        assert_eq!(figure.data[0]["x"].as_array().unwrap().len(), 0);
    }
}
