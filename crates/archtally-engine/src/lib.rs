// Engine - the pure middle of the pipeline. Takes validated count reports
// and a fixed topology, produces rollups and a positioned graph. No IO, no
// tool knowledge, no rendering.

pub mod aggregate;
pub mod compose;
pub mod graph;
pub mod layout;

pub use aggregate::{Aggregator, Rollups};
pub use compose::{PositionedGraph, PositionedNode, position_graph};
pub use graph::{ArchitectureGraph, GraphEdge, GraphNode, build_graph};
pub use layout::{LayoutParams, layout};
