use serde::{Deserialize, Serialize};

/// Additive rollup of file/blank/comment/code counts for one scope
/// (a project, a language, or the grand total).
///
/// The all-zero value (`Totals::default()`) is the identity element for
/// [`merge`](Totals::merge), which is field-wise addition and therefore
/// commutative and associative: rollups come out the same no matter what
/// order the contributing reports are merged in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub files: u64,
    pub blank: u64,
    pub comment: u64,
    pub code: u64,
}

impl Totals {
    pub fn new(files: u64, blank: u64, comment: u64, code: u64) -> Self {
        Self {
            files,
            blank,
            comment,
            code,
        }
    }

    /// Field-wise sum of two rollups.
    pub fn merge(self, other: Totals) -> Totals {
        Totals {
            files: self.files + other.files,
            blank: self.blank + other.blank,
            comment: self.comment + other.comment,
            code: self.code + other.code,
        }
    }

    /// Total line count across blank, comment and code lines.
    pub fn lines(&self) -> u64 {
        self.blank + self.comment + self.code
    }

    pub fn is_zero(&self) -> bool {
        *self == Totals::default()
    }
}
