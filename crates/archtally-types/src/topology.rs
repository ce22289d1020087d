use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Layered architecture topology: which named components exist, which layer
/// (diagram column) each one belongs to, and which directed edges may be
/// drawn between them.
///
/// This is configuration data, not program state. Layer declaration order
/// *is* the left-to-right column order of the rendered diagram; member
/// declaration order within a layer is the top-to-bottom stacking order.
/// Edges are candidates only: the graph builder drops any edge whose
/// endpoints were not actually measured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub layers: Vec<LayerSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
}

/// A configuration problem found by [`Topology::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyIssue {
    /// The same component id is declared in more than one place.
    DuplicateMember {
        id: String,
        first_layer: String,
        other_layer: String,
    },
    /// An edge from a component to itself.
    SelfEdge { id: String },
    /// An edge endpoint that no layer declares.
    UnknownEndpoint {
        from: String,
        to: String,
        missing: String,
    },
}

impl fmt::Display for TopologyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopologyIssue::DuplicateMember {
                id,
                first_layer,
                other_layer,
            } => write!(
                f,
                "component '{}' is declared in layer '{}' and again in layer '{}'",
                id, first_layer, other_layer
            ),
            TopologyIssue::SelfEdge { id } => {
                write!(f, "edge from '{}' to itself is not allowed", id)
            }
            TopologyIssue::UnknownEndpoint { from, to, missing } => write!(
                f,
                "edge '{}' -> '{}' references '{}', which no layer declares",
                from, to, missing
            ),
        }
    }
}

impl Topology {
    /// Fallback topology used when no layer policy is configured: every
    /// component in one layer, declaration order preserved, no edges.
    pub fn single_layer(name: &str, members: Vec<String>) -> Self {
        Self {
            layers: vec![LayerSpec {
                name: name.to_string(),
                members,
            }],
            edges: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer names in declaration (column) order.
    pub fn layer_order(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }

    /// True if some layer declares `id` as a member.
    pub fn declares(&self, id: &str) -> bool {
        self.layers
            .iter()
            .any(|l| l.members.iter().any(|m| m == id))
    }

    /// Check the configuration invariants the graph builder relies on but
    /// does not re-check at build time. All problems are reported in one
    /// pass so a config can be fixed in one edit.
    pub fn validate(&self) -> Vec<TopologyIssue> {
        let mut issues = Vec::new();

        let mut seen: HashMap<&str, &str> = HashMap::new();
        for layer in &self.layers {
            for member in &layer.members {
                if let Some(first_layer) = seen.get(member.as_str()) {
                    issues.push(TopologyIssue::DuplicateMember {
                        id: member.clone(),
                        first_layer: (*first_layer).to_string(),
                        other_layer: layer.name.clone(),
                    });
                } else {
                    seen.insert(member.as_str(), layer.name.as_str());
                }
            }
        }

        for edge in &self.edges {
            if edge.from == edge.to {
                issues.push(TopologyIssue::SelfEdge {
                    id: edge.from.clone(),
                });
                continue;
            }
            for endpoint in [&edge.from, &edge.to] {
                if !seen.contains_key(endpoint.as_str()) {
                    issues.push(TopologyIssue::UnknownEndpoint {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        issues
    }
}
