use crate::Totals;
use serde::{Deserialize, Serialize};

/// Validated count report for one measured path.
///
/// This is the strongly-typed form of what the line-counting tool emits:
/// one overall-summary rollup plus zero or more per-language rollups. The
/// collect layer rejects tool output without a summary entry before a
/// `CountReport` is ever constructed, so downstream aggregation never has
/// to deal with a missing summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountReport {
    /// Overall totals for the whole path (the tool's SUM entry).
    pub summary: Totals,
    /// Per-language breakdown, in deterministic (key-sorted) order.
    pub languages: Vec<LanguageCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub language: String,
    pub totals: Totals,
}

impl CountReport {
    pub fn new(summary: Totals) -> Self {
        Self {
            summary,
            languages: Vec::new(),
        }
    }

    pub fn with_language(mut self, language: &str, totals: Totals) -> Self {
        self.languages.push(LanguageCount {
            language: language.to_string(),
            totals,
        });
        self
    }
}
