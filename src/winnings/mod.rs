//! Player winnings: extraction from result tables, name normalization and
//! the aggregated player ledger.

mod extract;
mod ledger;
mod normalize;

pub use extract::extract;
pub use ledger::{aggregate, find, rank, SummarizedPlayer};
pub use normalize::normalize_all;

/// One paid finish as read from a table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerWinRaw {
    pub name_or_alias: String,
    pub surname: String,
    /// Whole currency units; the source's `.` is a thousands separator.
    pub winnings: u64,
}

impl PlayerWinRaw {
    /// Trimmed name and surname glued together without a separator.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.name_or_alias.trim(), self.surname.trim())
    }
}

/// A paid finish after name cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerWinNormalized {
    pub full_name: String,
    /// Grouping and dedup key, e.g. `John S.`.
    pub first_name_and_initial: String,
    pub winnings: u64,
}
