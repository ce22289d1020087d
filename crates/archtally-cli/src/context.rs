use crate::config::Config;
use anyhow::{Result, bail};
use archtally_collect::{
    ClocRunner, DEFAULT_BINARY, collect_reports, collect_reports_keep_going,
};
use archtally_types::CountReport;
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing::debug;

/// Shared state for handler execution: the loaded config plus resolved
/// global flags.
pub struct RunContext {
    pub config: Config,
    pub cloc_bin: String,
    pub color: bool,
}

impl RunContext {
    /// Binary resolution order: --cloc-bin flag, ARCHTALLY_CLOC, config,
    /// then the plain default.
    pub fn new(config: Config, cloc_bin: Option<String>, no_color: bool) -> Self {
        let cloc_bin = cloc_bin
            .or_else(|| std::env::var("ARCHTALLY_CLOC").ok())
            .or_else(|| config.collect.cloc_bin.clone())
            .unwrap_or_else(|| DEFAULT_BINARY.to_string());
        RunContext {
            config,
            cloc_bin,
            color: !no_color && std::io::stdout().is_terminal(),
        }
    }

    /// Command-line paths win; otherwise fall back to configured targets.
    pub fn resolve_targets(&self, paths: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
        if !paths.is_empty() {
            return Ok(paths);
        }
        let configured = self.config.targets();
        if configured.is_empty() {
            bail!(
                "no paths given and no [collect] targets configured; \
                 pass paths or run 'archtally init <paths>'"
            );
        }
        Ok(configured)
    }

    pub fn runner(&self) -> Result<ClocRunner> {
        let policy = self.config.policy();
        policy.validate()?;
        Ok(ClocRunner::new(self.cloc_bin.as_str(), policy))
    }

    /// The full collection step both measuring commands share: resolve
    /// targets, probe the tool, count everything. With `keep_going`,
    /// per-target failures are reported to stderr and the rest proceeds;
    /// the run only fails once nothing at all was counted.
    pub fn collect(
        &self,
        paths: Vec<PathBuf>,
        keep_going: bool,
    ) -> Result<Vec<(String, CountReport)>> {
        let targets = self.resolve_targets(paths)?;
        let runner = self.runner()?;
        runner.probe()?;
        debug!(targets = targets.len(), binary = %self.cloc_bin, "counting lines");

        if keep_going {
            let (reports, failures) = collect_reports_keep_going(&runner, &targets)?;
            for (label, error) in &failures {
                eprintln!("warning: skipping {}: {}", label, error);
            }
            if reports.is_empty() && !failures.is_empty() {
                bail!("all {} targets failed to count", failures.len());
            }
            Ok(reports)
        } else {
            Ok(collect_reports(&runner, &targets)?)
        }
    }
}
