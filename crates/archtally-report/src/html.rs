use crate::chart;
use crate::diagram::architecture_figure;
use crate::plotly::{Figure, PLOTLY_CDN};
use archtally_engine::{PositionedGraph, Rollups};
use archtally_types::util::fmt_count;

/// Compose the full standalone report document.
///
/// One CDN script tag in the head serves every figure; the rest of the
/// document is self-contained, so the file can be mailed around or dropped
/// on a static server as-is. `generated_at` arrives preformatted so this
/// stays a pure string transform.
pub fn compose_report(
    title: &str,
    generated_at: &str,
    rollups: &Rollups,
    graph: &PositionedGraph,
) -> String {
    let arch = architecture_figure(graph).to_div("arch-diagram");
    let proj_pie = Figure::pie(&chart::project_pie(rollups)).to_div("project-pie");
    let proj_bar = Figure::bar(&chart::project_bar(rollups)).to_div("project-bar");
    let lang_pie = Figure::pie(&chart::language_pie(rollups)).to_div("language-pie");
    let lang_bar = Figure::bar(&chart::language_bar(rollups)).to_div("language-bar");
    let proj_table = Figure::table(&chart::project_table(rollups)).to_div("project-table");
    let lang_table = Figure::table(&chart::language_table(rollups)).to_div("language-table");

    let title = escape_text(title);
    let grand = &rollups.grand;

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{PLOTLY_CDN}"></script>
</head>
<body>
<div style="font-family: Arial, sans-serif; max-width: 1200px; margin: 18px auto;">
  <h1 style="margin-bottom: 6px;">{title}</h1>
  <div style="color: #555; margin-bottom: 16px;">
    <div><b>Generated:</b> {generated_at}</div>
    <div><b>Grand total:</b> Files {files} &middot; Blank {blank} &middot; Comment {comment} &middot; Code {code}</div>
  </div>
  <hr/>

  <h2>Architecture</h2>
  <p style="color:#555; margin-top: -6px;">
    Layered flow diagram. Hover components for metrics.
  </p>
  {arch}
  <hr style="margin: 22px 0;"/>

  <h2>Project contributions</h2>
  <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 18px;">
    <div>{proj_pie}</div>
    <div>{proj_bar}</div>
  </div>
  <div style="margin-top: 14px;">{proj_table}</div>
  <hr style="margin: 22px 0;"/>

  <h2>Language contributions (overall)</h2>
  <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 18px;">
    <div>{lang_pie}</div>
    <div>{lang_bar}</div>
  </div>
  <div style="margin-top: 14px;">{lang_table}</div>
  <hr style="margin: 22px 0;"/>

  <div style="color:#777; font-size: 12px;">
    Notes: counts exclude vendored and runtime directories and selected file extensions per the configured policy.
  </div>
</div>
</body>
</html>
"#,
        files = fmt_count(grand.files),
        blank = fmt_count(grand.blank),
        comment = fmt_count(grand.comment),
        code = fmt_count(grand.code),
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
