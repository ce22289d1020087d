use crate::context::RunContext;
use anyhow::{Context, Result};
use archtally_engine::{Aggregator, LayoutParams, build_graph, position_graph};
use archtally_report::compose_report;
use chrono::Local;
use std::path::PathBuf;

const DEFAULT_TITLE: &str = "Architecture + Codebase Statistics (Interactive)";

pub fn handle(
    ctx: &RunContext,
    paths: Vec<PathBuf>,
    output: PathBuf,
    title: Option<String>,
    keep_going: bool,
) -> Result<()> {
    let reports = ctx.collect(paths, keep_going)?;

    let mut agg = Aggregator::new();
    let mut labels: Vec<String> = Vec::new();
    for (label, report) in &reports {
        if !labels.contains(label) {
            labels.push(label.clone());
        }
        agg.add_report(label, report);
    }
    let rollups = agg.finish();

    let topology = ctx.config.effective_topology(&labels);
    let graph = build_graph(&rollups.project_ids(), &topology);
    let order = topology.layer_order();
    let positioned = position_graph(
        &graph,
        &order,
        &LayoutParams::default(),
        &rollups.projects,
    );

    let title = title
        .or_else(|| ctx.config.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let generated_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let html = compose_report(&title, &generated_at, &rollups, &positioned);

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tracing::debug!(path = %output.display(), bytes = html.len(), "writing report");
    std::fs::write(&output, html)
        .with_context(|| format!("failed to write report {}", output.display()))?;

    println!("OK: wrote interactive report: {}", output.display());
    Ok(())
}
