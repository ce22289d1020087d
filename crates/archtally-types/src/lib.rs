pub mod report;
pub mod topology;
pub mod totals;
pub mod util;

pub use report::{CountReport, LanguageCount};
pub use topology::{EdgeSpec, LayerSpec, Topology, TopologyIssue};
pub use totals::Totals;
