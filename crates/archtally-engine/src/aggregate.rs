use archtally_types::{CountReport, Totals};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Accumulates validated count reports into the three output rollups.
///
/// Merging is field-wise addition, so the result does not depend on the
/// order reports are added. The aggregator never drops anything either:
/// adding a second report under an existing label accumulates into it,
/// which is what repeated measurement of the same logical component means.
/// Callers that care about submission order keep their own label sequence;
/// the rollup maps themselves iterate alphabetically.
#[derive(Debug, Default)]
pub struct Aggregator {
    grand: Totals,
    projects: BTreeMap<String, Totals>,
    languages: BTreeMap<String, Totals>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one report in: its summary into the project and grand rollups,
    /// its per-language rows into the language rollup.
    pub fn add_report(&mut self, label: &str, report: &CountReport) {
        let slot = self.projects.entry(label.to_string()).or_default();
        *slot = slot.merge(report.summary);
        self.grand = self.grand.merge(report.summary);
        for language in &report.languages {
            let slot = self.languages.entry(language.language.clone()).or_default();
            *slot = slot.merge(language.totals);
        }
    }

    pub fn finish(self) -> Rollups {
        Rollups {
            grand: self.grand,
            projects: self.projects,
            languages: self.languages,
        }
    }
}

/// The three rollups every presentation stage reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rollups {
    pub grand: Totals,
    pub projects: BTreeMap<String, Totals>,
    pub languages: BTreeMap<String, Totals>,
}

impl Rollups {
    /// Ids of every measured component, for topology filtering.
    pub fn project_ids(&self) -> HashSet<String> {
        self.projects.keys().cloned().collect()
    }

    /// Project rows sorted by code lines descending; ties stay alphabetical.
    pub fn projects_by_code(&self) -> Vec<(&str, Totals)> {
        sorted_by_code(&self.projects)
    }

    /// Language rows sorted by code lines descending; ties stay alphabetical.
    pub fn languages_by_code(&self) -> Vec<(&str, Totals)> {
        sorted_by_code(&self.languages)
    }
}

fn sorted_by_code(map: &BTreeMap<String, Totals>) -> Vec<(&str, Totals)> {
    let mut rows: Vec<(&str, Totals)> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    rows.sort_by(|a, b| b.1.code.cmp(&a.1.code));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(files: u64, blank: u64, comment: u64, code: u64) -> CountReport {
        CountReport::new(Totals::new(files, blank, comment, code))
    }

    #[test]
    fn test_two_projects_fold_into_the_grand_total() {
        let mut agg = Aggregator::new();
        agg.add_report("alpha", &report(3, 10, 5, 50));
        agg.add_report("beta", &report(2, 4, 1, 20));
        let rollups = agg.finish();

        assert_eq!(rollups.grand, Totals::new(5, 14, 6, 70));
        assert_eq!(rollups.projects["alpha"], Totals::new(3, 10, 5, 50));
        assert_eq!(rollups.projects["beta"], Totals::new(2, 4, 1, 20));
    }

    #[test]
    fn test_duplicate_label_accumulates() {
        let mut agg = Aggregator::new();
        agg.add_report("alpha", &report(1, 0, 0, 10));
        agg.add_report("alpha", &report(2, 0, 0, 15));
        let rollups = agg.finish();

        assert_eq!(rollups.projects.len(), 1);
        assert_eq!(rollups.projects["alpha"], Totals::new(3, 0, 0, 25));
        assert_eq!(rollups.grand.code, 25);
    }

    #[test]
    fn test_languages_combine_across_projects() {
        let mut agg = Aggregator::new();
        agg.add_report(
            "alpha",
            &report(2, 1, 1, 30).with_language("Python", Totals::new(2, 1, 1, 30)),
        );
        agg.add_report(
            "beta",
            &report(3, 2, 0, 45)
                .with_language("Python", Totals::new(1, 1, 0, 15))
                .with_language("Rust", Totals::new(2, 1, 0, 30)),
        );
        let rollups = agg.finish();

        assert_eq!(rollups.languages["Python"], Totals::new(3, 2, 1, 45));
        assert_eq!(rollups.languages["Rust"], Totals::new(2, 1, 0, 30));
    }

    #[test]
    fn test_well_formed_reports_keep_rollups_consistent() {
        // When every report's languages sum to its summary, the language
        // rollup and the project rollup both add up to the grand total.
        let mut agg = Aggregator::new();
        agg.add_report(
            "alpha",
            &report(3, 4, 2, 50)
                .with_language("Python", Totals::new(2, 3, 2, 35))
                .with_language("SQL", Totals::new(1, 1, 0, 15)),
        );
        agg.add_report(
            "beta",
            &report(2, 2, 1, 20).with_language("Python", Totals::new(2, 2, 1, 20)),
        );
        let rollups = agg.finish();

        let mut from_projects = Totals::default();
        for totals in rollups.projects.values() {
            from_projects = from_projects.merge(*totals);
        }
        let mut from_languages = Totals::default();
        for totals in rollups.languages.values() {
            from_languages = from_languages.merge(*totals);
        }
        assert_eq!(from_projects, rollups.grand);
        assert_eq!(from_languages, rollups.grand);
    }

    #[test]
    fn test_order_of_addition_does_not_matter() {
        let a = report(3, 10, 5, 50).with_language("Python", Totals::new(3, 10, 5, 50));
        let b = report(2, 4, 1, 20).with_language("Rust", Totals::new(2, 4, 1, 20));

        let mut forward = Aggregator::new();
        forward.add_report("alpha", &a);
        forward.add_report("beta", &b);

        let mut backward = Aggregator::new();
        backward.add_report("beta", &b);
        backward.add_report("alpha", &a);

        assert_eq!(forward.finish(), backward.finish());
    }

    #[test]
    fn test_empty_aggregator_yields_zero_rollups() {
        let rollups = Aggregator::new().finish();
        assert!(rollups.grand.is_zero());
        assert!(rollups.projects.is_empty());
        assert!(rollups.languages.is_empty());
        assert!(rollups.project_ids().is_empty());
    }

    #[test]
    fn test_sorting_is_by_code_descending_with_alphabetical_ties() {
        let mut agg = Aggregator::new();
        agg.add_report("mid", &report(1, 0, 0, 50));
        agg.add_report("big", &report(1, 0, 0, 90));
        agg.add_report("tie-b", &report(1, 0, 0, 10));
        agg.add_report("tie-a", &report(1, 0, 0, 10));
        let rollups = agg.finish();

        let names: Vec<&str> = rollups.projects_by_code().iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["big", "mid", "tie-a", "tie-b"]);
    }
}
