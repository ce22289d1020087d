use crate::context::RunContext;
use crate::table;
use crate::types::StatsFormat;
use anyhow::Result;
use archtally_engine::{Aggregator, Rollups};
use archtally_report::chart::code_percent;
use archtally_types::Totals;
use std::path::PathBuf;

pub fn handle(
    ctx: &RunContext,
    paths: Vec<PathBuf>,
    format: StatsFormat,
    top: usize,
    keep_going: bool,
) -> Result<()> {
    let reports = ctx.collect(paths, keep_going)?;

    let mut agg = Aggregator::new();
    for (label, report) in &reports {
        agg.add_report(label, report);
    }
    let rollups = agg.finish();

    match format {
        StatsFormat::Plain => {
            // One row per measured path, in the order they were given.
            let rows: Vec<(String, Totals)> = reports
                .iter()
                .map(|(label, report)| (label.clone(), report.summary))
                .collect();
            table::print_project_rows(&rows, rollups.grand, ctx.color);

            let mut languages = rollups.languages_by_code();
            languages.truncate(top);
            table::print_language_rows(&languages, ctx.color);
        }
        StatsFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rollups)?);
        }
        StatsFormat::Csv => {
            write_csv(&rollups)?;
        }
    }
    Ok(())
}

fn write_csv(rollups: &Rollups) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record(["Project", "Files", "Blank", "Comment", "Code", "Code %"])?;
    for (name, totals) in rollups.projects_by_code() {
        writer.write_record([
            name.to_string(),
            totals.files.to_string(),
            totals.blank.to_string(),
            totals.comment.to_string(),
            totals.code.to_string(),
            format!("{:.2}", code_percent(totals, rollups.grand)),
        ])?;
    }
    writer.write_record([
        "GRAND TOTAL".to_string(),
        rollups.grand.files.to_string(),
        rollups.grand.blank.to_string(),
        rollups.grand.comment.to_string(),
        rollups.grand.code.to_string(),
        format!("{:.2}", code_percent(rollups.grand, rollups.grand)),
    ])?;
    writer.flush()?;
    Ok(())
}
