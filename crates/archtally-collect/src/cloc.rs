use crate::error::{Error, Result};
use crate::policy::ExcludePolicy;
use crate::schema::parse_report;
use archtally_types::CountReport;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Default binary name, overridable per run.
pub const DEFAULT_BINARY: &str = "cloc";

/// Black-box interface to a line-counting tool.
///
/// Everything downstream consumes validated `CountReport` values through
/// this trait, so tests can swap in synthetic counters without a real
/// binary on PATH.
pub trait LineCounter {
    /// Count one target directory or file.
    fn count(&self, path: &Path) -> Result<CountReport>;
}

/// Invokes the real counting binary with a pass-through exclusion policy.
#[derive(Debug, Clone)]
pub struct ClocRunner {
    binary: String,
    policy: ExcludePolicy,
}

impl ClocRunner {
    pub fn new(binary: impl Into<String>, policy: ExcludePolicy) -> Self {
        ClocRunner {
            binary: binary.into(),
            policy,
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Confirm the binary exists and runs before any real work starts.
    pub fn probe(&self) -> Result<()> {
        let status = Command::new(&self.binary)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(code) if code.success() => Ok(()),
            _ => Err(Error::ToolMissing {
                binary: self.binary.clone(),
            }),
        }
    }
}

impl LineCounter for ClocRunner {
    fn count(&self, path: &Path) -> Result<CountReport> {
        let args = self.policy.to_args();
        debug!(binary = %self.binary, target = %path.display(), "running line count");
        let output = Command::new(&self.binary)
            .arg(path)
            .args(&args)
            .arg("--json")
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::ToolMissing {
                    binary: self.binary.clone(),
                },
                _ => Error::Io(e),
            })?;

        if !output.status.success() {
            return Err(Error::Tool {
                path: path.to_path_buf(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_report(path, &stdout)
    }
}

/// Check every requested target before any counting work begins.
///
/// All missing paths are reported together so the caller fixes the whole
/// list in one pass instead of replaying the run per typo.
pub fn validate_paths(paths: &[PathBuf]) -> Result<()> {
    let missing: Vec<String> = paths
        .iter()
        .filter(|p| !p.exists())
        .map(|p| p.display().to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingPaths(missing))
    }
}

/// Count every target in order, stopping at the first failure.
///
/// Labels are the paths exactly as given; downstream tables keep this
/// submission order.
pub fn collect_reports(
    counter: &dyn LineCounter,
    targets: &[PathBuf],
) -> Result<Vec<(String, CountReport)>> {
    validate_paths(targets)?;
    let mut reports = Vec::with_capacity(targets.len());
    for target in targets {
        let report = counter.count(target)?;
        reports.push((target.display().to_string(), report));
    }
    Ok(reports)
}

/// Batch-tolerant variant: per-target failures are returned alongside the
/// successes so one broken tree never blocks the rest of the run. Path
/// existence is still checked up front for the whole list.
pub fn collect_reports_keep_going(
    counter: &dyn LineCounter,
    targets: &[PathBuf],
) -> Result<(Vec<(String, CountReport)>, Vec<(String, Error)>)> {
    validate_paths(targets)?;
    let mut reports = Vec::new();
    let mut failures = Vec::new();
    for target in targets {
        let label = target.display().to_string();
        match counter.count(target) {
            Ok(report) => reports.push((label, report)),
            Err(e) => failures.push((label, e)),
        }
    }
    Ok((reports, failures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use archtally_types::Totals;
    use std::collections::BTreeMap;

    struct FakeCounter {
        responses: BTreeMap<String, CountReport>,
    }

    impl FakeCounter {
        fn new() -> Self {
            FakeCounter {
                responses: BTreeMap::new(),
            }
        }

        fn with(mut self, path: &str, code: u64) -> Self {
            self.responses.insert(
                path.to_string(),
                CountReport::new(Totals::new(1, 0, 0, code)),
            );
            self
        }
    }

    impl LineCounter for FakeCounter {
        fn count(&self, path: &Path) -> Result<CountReport> {
            self.responses
                .get(&path.display().to_string())
                .cloned()
                .ok_or_else(|| Error::Tool {
                    path: path.to_path_buf(),
                    detail: "synthetic failure".to_string(),
                })
        }
    }

    fn existing_dirs(dir: &tempfile::TempDir, names: &[&str]) -> Vec<PathBuf> {
        names
            .iter()
            .map(|name| {
                let path = dir.path().join(name);
                std::fs::create_dir_all(&path).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_validate_paths_lists_all_missing_at_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut targets = existing_dirs(&dir, &["real"]);
        targets.push(dir.path().join("ghost-a"));
        targets.push(dir.path().join("ghost-b"));

        let err = validate_paths(&targets).unwrap_err();
        match err {
            Error::MissingPaths(missing) => {
                assert_eq!(missing.len(), 2);
                assert!(missing[0].contains("ghost-a"));
                assert!(missing[1].contains("ghost-b"));
            }
            other => panic!("expected MissingPaths, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_paths_accepts_existing() {
        let dir = tempfile::tempdir().unwrap();
        let targets = existing_dirs(&dir, &["a", "b"]);
        assert!(validate_paths(&targets).is_ok());
    }

    #[test]
    fn test_collect_reports_preserves_submission_order() {
        let dir = tempfile::tempdir().unwrap();
        let targets = existing_dirs(&dir, &["zeta", "alpha"]);
        let counter = FakeCounter::new()
            .with(&targets[0].display().to_string(), 10)
            .with(&targets[1].display().to_string(), 20);

        let reports = collect_reports(&counter, &targets).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[0].0.ends_with("zeta"));
        assert!(reports[1].0.ends_with("alpha"));
        assert_eq!(reports[0].1.summary.code, 10);
    }

    #[test]
    fn test_collect_reports_stops_on_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let targets = existing_dirs(&dir, &["good", "bad", "later"]);
        let counter = FakeCounter::new()
            .with(&targets[0].display().to_string(), 10)
            .with(&targets[2].display().to_string(), 30);

        let err = collect_reports(&counter, &targets).unwrap_err();
        assert!(matches!(err, Error::Tool { .. }));
    }

    #[test]
    fn test_collect_reports_keep_going_partitions_failures() {
        let dir = tempfile::tempdir().unwrap();
        let targets = existing_dirs(&dir, &["good", "bad", "later"]);
        let counter = FakeCounter::new()
            .with(&targets[0].display().to_string(), 10)
            .with(&targets[2].display().to_string(), 30);

        let (reports, failures) = collect_reports_keep_going(&counter, &targets).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].0.ends_with("bad"));
    }

    #[test]
    fn test_keep_going_still_validates_paths_up_front() {
        let dir = tempfile::tempdir().unwrap();
        let mut targets = existing_dirs(&dir, &["real"]);
        targets.push(dir.path().join("ghost"));

        let counter = FakeCounter::new().with(&targets[0].display().to_string(), 10);
        let err = collect_reports_keep_going(&counter, &targets).unwrap_err();
        assert!(matches!(err, Error::MissingPaths(_)));
    }
}
