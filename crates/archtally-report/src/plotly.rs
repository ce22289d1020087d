use crate::chart::{BarChart, PieChart, TableChart};
use serde_json::{Value, json};

/// Pinned plotly.js build; every figure in a report shares this one script.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// One plotly figure: trace data plus layout, kept as plain JSON values so
/// the document composer can embed it without knowing chart internals.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    pub fn pie(chart: &PieChart) -> Figure {
        Figure {
            data: vec![json!({
                "type": "pie",
                "labels": chart.labels,
                "values": chart.values,
                "hole": chart.hole,
            })],
            layout: json!({
                "title": chart.title,
                "height": 420,
                "margin": {"l": 20, "r": 20, "t": 60, "b": 20},
            }),
        }
    }

    pub fn bar(chart: &BarChart) -> Figure {
        Figure {
            data: vec![json!({
                "type": "bar",
                "x": chart.labels,
                "y": chart.values,
            })],
            layout: json!({
                "title": chart.title,
                "xaxis": {"title": ""},
                "yaxis": {"title": chart.value_title},
                "height": 420,
                "margin": {"l": 20, "r": 20, "t": 60, "b": 20},
            }),
        }
    }

    pub fn table(chart: &TableChart) -> Figure {
        let header: Vec<String> = chart
            .columns
            .iter()
            .map(|c| format!("<b>{}</b>", c))
            .collect();
        Figure {
            data: vec![json!({
                "type": "table",
                "header": {"values": header, "align": "left"},
                "cells": {"values": chart.cells, "align": "left"},
            })],
            layout: json!({
                "title": chart.title,
                "height": 420,
                "margin": {"l": 20, "r": 20, "t": 60, "b": 20},
            }),
        }
    }

    /// Render as a div plus the script that mounts the figure into it.
    /// The id must be unique within the document.
    pub fn to_div(&self, id: &str) -> String {
        let data = embed_json(&Value::Array(self.data.clone()));
        let layout = embed_json(&self.layout);
        format!(
            "<div id=\"{id}\" class=\"plotly-chart\"></div>\n\
             <script>Plotly.newPlot(\"{id}\", {data}, {layout}, {{\"responsive\": true}});</script>"
        )
    }
}

// Keeps "</script>" out of inline JSON no matter what ends up in a label.
fn embed_json(value: &Value) -> String {
    value.to_string().replace('<', "\\u003c")
}
