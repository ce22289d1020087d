use crate::error::{Error, Result};
use regex::Regex;

/// Directory names skipped by default: vendored trees, virtualenvs,
/// generated code and scratch areas that would swamp the counts.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    "obsolete",
    "staticfiles",
    "node_modules",
    ".venv",
    "env",
    "__pycache__",
    "migrations",
    "admin",
    "venv",
    "gnn_env",
    "venv_sys",
    "work",
    "input",
    "demo",
];

/// File extensions skipped by default: data, lockfiles and build artifacts.
pub const DEFAULT_EXCLUDE_EXTS: &[&str] = &[
    "svg", "json", "txt", "csv", "lock", "min.js", "map", "md",
];

/// Default full-path pattern for data-heavy directories.
pub const DEFAULT_NOT_MATCH_D: &str = "(data|uploads|downloads|cache|results|logs)";

/// Exclusion policy handed through to the counting tool.
///
/// The policy never filters anything itself; it only shapes the tool's
/// command line. `not_match_d` is applied by the tool against full paths,
/// which is why `to_args` always pairs it with `--fullpath`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludePolicy {
    pub dirs: Vec<String>,
    pub exts: Vec<String>,
    pub not_match_d: Option<String>,
}

impl Default for ExcludePolicy {
    fn default() -> Self {
        ExcludePolicy {
            dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            exts: DEFAULT_EXCLUDE_EXTS.iter().map(|s| s.to_string()).collect(),
            not_match_d: Some(DEFAULT_NOT_MATCH_D.to_string()),
        }
    }
}

impl ExcludePolicy {
    /// A policy that excludes nothing.
    pub fn permissive() -> Self {
        ExcludePolicy {
            dirs: Vec::new(),
            exts: Vec::new(),
            not_match_d: None,
        }
    }

    /// Check the path pattern compiles before any tool run happens.
    pub fn validate(&self) -> Result<()> {
        if let Some(pattern) = &self.not_match_d {
            Regex::new(pattern).map_err(|e| {
                Error::Policy(format!("bad path pattern '{}': {}", pattern, e))
            })?;
        }
        Ok(())
    }

    /// Command-line arguments for the counting tool, in a fixed order.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if !self.dirs.is_empty() {
            args.push("--exclude-dir".to_string());
            args.push(self.dirs.join(","));
        }
        if !self.exts.is_empty() {
            args.push("--exclude-ext".to_string());
            args.push(self.exts.join(","));
        }
        if let Some(pattern) = &self.not_match_d {
            args.push("--fullpath".to_string());
            args.push("--not-match-d".to_string());
            args.push(pattern.clone());
        }
        args
    }
}
