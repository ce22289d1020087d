// Collection boundary - everything that talks to the external counting tool
// lives here, so the rest of the workspace only ever sees validated reports.

// Error types
pub mod error;

// Exclusion policy handed through to the tool
pub mod policy;

// Tool output parsing
mod schema;

// Tool invocation and batch collection
pub mod cloc;

pub use cloc::{
    ClocRunner, DEFAULT_BINARY, LineCounter, collect_reports, collect_reports_keep_going,
    validate_paths,
};
pub use error::{Error, Result};
pub use policy::{
    DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_EXTS, DEFAULT_NOT_MATCH_D, ExcludePolicy,
};
pub use schema::parse_report;
