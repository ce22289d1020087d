// Report composer - turns rollups and a positioned graph into a single
// standalone HTML document. Pure string assembly; writing the file is the
// caller's business.

pub mod chart;
pub mod diagram;
pub mod html;
pub mod plotly;

pub use diagram::architecture_figure;
pub use html::compose_report;
pub use plotly::{Figure, PLOTLY_CDN};
