use archtally_engine::Rollups;
use archtally_types::Totals;

/// Donut pie over labeled values.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub hole: f64,
}

/// Vertical bars over labeled values.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub value_title: String,
}

/// Column-oriented table; `cells[i]` is the full column under `columns[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TableChart {
    pub title: String,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<String>>,
}

/// How many languages the pie keeps readable.
pub const LANGUAGE_PIE_TOP: usize = 14;
/// How many languages the bar chart keeps readable.
pub const LANGUAGE_BAR_TOP: usize = 20;

const DONUT_HOLE: f64 = 0.35;
const VALUE_TITLE: &str = "Code lines";

pub fn project_pie(rollups: &Rollups) -> PieChart {
    let (labels, values) = split(rollups.projects_by_code());
    PieChart {
        title: "Project contribution (by code lines)".to_string(),
        labels,
        values,
        hole: DONUT_HOLE,
    }
}

pub fn project_bar(rollups: &Rollups) -> BarChart {
    let (labels, values) = split(rollups.projects_by_code());
    BarChart {
        title: "Project contribution (bar)".to_string(),
        labels,
        values,
        value_title: VALUE_TITLE.to_string(),
    }
}

pub fn language_pie(rollups: &Rollups) -> PieChart {
    let mut rows = rollups.languages_by_code();
    rows.truncate(LANGUAGE_PIE_TOP);
    let (labels, values) = split(rows);
    PieChart {
        title: "Top languages (by code lines)".to_string(),
        labels,
        values,
        hole: DONUT_HOLE,
    }
}

pub fn language_bar(rollups: &Rollups) -> BarChart {
    let mut rows = rollups.languages_by_code();
    rows.truncate(LANGUAGE_BAR_TOP);
    let (labels, values) = split(rows);
    BarChart {
        title: "Top languages (bar)".to_string(),
        labels,
        values,
        value_title: VALUE_TITLE.to_string(),
    }
}

pub fn project_table(rollups: &Rollups) -> TableChart {
    totals_table(
        "Per-project totals",
        "Project",
        rollups.projects_by_code(),
        rollups.grand,
    )
}

pub fn language_table(rollups: &Rollups) -> TableChart {
    totals_table(
        "Language totals (overall)",
        "Language",
        rollups.languages_by_code(),
        rollups.grand,
    )
}

/// Share of the grand code total, rounded to two decimals; zero when the
/// grand total itself is zero.
pub fn code_percent(totals: Totals, grand: Totals) -> f64 {
    if grand.code == 0 {
        0.0
    } else {
        (10_000.0 * totals.code as f64 / grand.code as f64).round() / 100.0
    }
}

fn split(rows: Vec<(&str, Totals)>) -> (Vec<String>, Vec<u64>) {
    let labels = rows.iter().map(|(name, _)| name.to_string()).collect();
    let values = rows.iter().map(|(_, totals)| totals.code).collect();
    (labels, values)
}

fn totals_table(
    title: &str,
    key_column: &str,
    rows: Vec<(&str, Totals)>,
    grand: Totals,
) -> TableChart {
    let mut names = Vec::with_capacity(rows.len());
    let mut files = Vec::with_capacity(rows.len());
    let mut blank = Vec::with_capacity(rows.len());
    let mut comment = Vec::with_capacity(rows.len());
    let mut code = Vec::with_capacity(rows.len());
    let mut percent = Vec::with_capacity(rows.len());
    for (name, totals) in rows {
        names.push(name.to_string());
        files.push(totals.files.to_string());
        blank.push(totals.blank.to_string());
        comment.push(totals.comment.to_string());
        code.push(totals.code.to_string());
        percent.push(format!("{:.2}", code_percent(totals, grand)));
    }
    TableChart {
        title: title.to_string(),
        columns: vec![
            key_column.to_string(),
            "Files".to_string(),
            "Blank".to_string(),
            "Comment".to_string(),
            "Code".to_string(),
            "Code %".to_string(),
        ],
        cells: vec![names, files, blank, comment, code, percent],
    }
}
