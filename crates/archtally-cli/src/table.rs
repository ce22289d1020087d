use archtally_types::Totals;
use archtally_types::util::fmt_count;
use owo_colors::OwoColorize;

const RULE_WIDTH: usize = 78;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

fn emphasize(text: &str, color: bool) -> String {
    if color {
        format!("{}", text.bold())
    } else {
        text.to_string()
    }
}

fn wide_row(label: &str, totals: Totals) -> String {
    format!(
        "{:<40} {:>8} {:>10} {:>10} {:>10}",
        label,
        fmt_count(totals.files),
        fmt_count(totals.blank),
        fmt_count(totals.comment),
        fmt_count(totals.code),
    )
}

fn narrow_row(label: &str, totals: Totals) -> String {
    format!(
        "{:<25} {:>8} {:>10} {:>10} {:>10}",
        label,
        fmt_count(totals.files),
        fmt_count(totals.blank),
        fmt_count(totals.comment),
        fmt_count(totals.code),
    )
}

/// Per-project table in measurement order, closed by the grand total.
pub fn print_project_rows(rows: &[(String, Totals)], grand: Totals, color: bool) {
    println!();
    println!("Per-project totals (from cloc JSON SUM):");
    println!("{}", rule());
    println!(
        "{}",
        emphasize(
            &format!(
                "{:<40} {:>8} {:>10} {:>10} {:>10}",
                "Project", "Files", "Blank", "Comment", "Code"
            ),
            color,
        )
    );
    println!("{}", rule());
    for (label, totals) in rows {
        println!("{}", wide_row(label, *totals));
    }
    println!("{}", rule());
    println!("{}", emphasize(&wide_row("GRAND TOTAL", grand), color));
    println!("{}", rule());
}

/// Combined language table, biggest first. Prints nothing for no rows.
pub fn print_language_rows(rows: &[(&str, Totals)], color: bool) {
    if rows.is_empty() {
        return;
    }
    println!();
    println!("Top languages (combined, by code lines):");
    println!("{}", rule());
    println!(
        "{}",
        emphasize(
            &format!(
                "{:<25} {:>8} {:>10} {:>10} {:>10}",
                "Language", "Files", "Blank", "Comment", "Code"
            ),
            color,
        )
    );
    println!("{}", rule());
    for (label, totals) in rows {
        println!("{}", narrow_row(label, *totals));
    }
    println!("{}", rule());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_row_aligns_grouped_numbers() {
        let row = wide_row("api", Totals::new(21, 344, 279, 2393));
        assert!(row.starts_with("api"));
        assert!(row.ends_with("2,393"));
        assert_eq!(row.len(), 82);
    }

    #[test]
    fn test_emphasize_passes_through_without_color() {
        assert_eq!(emphasize("Project", false), "Project");
        assert!(emphasize("Project", true).contains("Project"));
    }
}
