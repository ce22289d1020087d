use crate::config::FALLBACK_LAYER;
use crate::context::RunContext;
use anyhow::{Result, bail};
use owo_colors::OwoColorize;

pub fn show(ctx: &RunContext) -> Result<()> {
    let Some(topology) = &ctx.config.topology else {
        println!(
            "No [topology] configured; reports fall back to a single '{}' layer.",
            FALLBACK_LAYER
        );
        return Ok(());
    };

    for layer in &topology.layers {
        if ctx.color {
            println!("{}", layer.name.bold());
        } else {
            println!("{}", layer.name);
        }
        for member in &layer.members {
            println!("  - {}", member);
        }
    }

    if !topology.edges.is_empty() {
        println!();
        println!("Edges:");
        for edge in &topology.edges {
            println!("  {} -> {}", edge.from, edge.to);
        }
    }
    Ok(())
}

pub fn check(ctx: &RunContext) -> Result<()> {
    let Some(topology) = &ctx.config.topology else {
        println!("No [topology] configured; nothing to check.");
        return Ok(());
    };

    let issues = topology.validate();
    if issues.is_empty() {
        let members: usize = topology.layers.iter().map(|l| l.members.len()).sum();
        println!(
            "Topology OK: {} layers, {} members, {} edges.",
            topology.layers.len(),
            members,
            topology.edges.len()
        );
        return Ok(());
    }

    eprintln!("Topology problems:");
    for issue in &issues {
        eprintln!("  - {}", issue);
    }
    bail!("topology has {} problem(s)", issues.len());
}
