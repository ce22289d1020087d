use std::fmt;
use std::path::PathBuf;

/// Result type for collection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the line-counting boundary.
///
/// Everything past this boundary works on validated reports, so these
/// variants are the only way a bad tool run or a bad path surfaces.
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Tool output was not valid JSON
    Json(serde_json::Error),

    /// The counting tool is not installed or not runnable
    ToolMissing { binary: String },

    /// The counting tool ran and failed for one target
    Tool { path: PathBuf, detail: String },

    /// Tool output parsed but carried no overall summary entry
    MissingSummary { path: PathBuf },

    /// Requested targets that do not exist, all listed at once
    MissingPaths(Vec<String>),

    /// Exclusion policy is unusable (bad path pattern)
    Policy(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::ToolMissing { binary } => write!(
                f,
                "'{}' is not installed or not on PATH (install cloc, e.g. apt-get install cloc)",
                binary
            ),
            Error::Tool { path, detail } => {
                write!(f, "count failed for '{}': {}", path.display(), detail)
            }
            Error::MissingSummary { path } => write!(
                f,
                "count output for '{}' has no overall summary (SUM) entry",
                path.display()
            ),
            Error::MissingPaths(paths) => {
                write!(f, "paths do not exist: {}", paths.join(", "))
            }
            Error::Policy(detail) => write!(f, "invalid exclusion policy: {}", detail),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}
