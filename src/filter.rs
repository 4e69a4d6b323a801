//! Pure derivation of per-account table views from the raw transaction set,
//! plus the per-account visibility toggles.

use std::collections::HashMap;
use std::fmt;

use crate::models::Transaction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Half-open amount interval: a transaction matches iff `min <= amount < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

impl AmountRange {
    pub fn contains(&self, amount: f64) -> bool {
        self.min <= amount && amount < self.max
    }

    /// Parses the `"min-max"` form the range `<select>` options use.
    pub fn parse(raw: &str) -> Option<Self> {
        let (min, max) = raw.split_once('-')?;
        let min = min.trim().parse().ok()?;
        let max = max.trim().parse().ok()?;
        Some(Self { min, max })
    }
}

impl fmt::Display for AmountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Transient, per-table filter state. Default shows everything, most recent
/// first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub amount_range: Option<AmountRange>,
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Derives the visible rows for one account's table. Scoping to the account
/// always happens first, then the optional filters, then a stable date sort
/// so equal dates keep their input order. The input set is never mutated.
pub fn derive(
    all: &[Transaction],
    account_id: i64,
    criteria: &FilterCriteria,
) -> Vec<Transaction> {
    let mut rows: Vec<Transaction> = all
        .iter()
        .filter(|txn| txn.account_id == account_id)
        .filter(|txn| {
            criteria
                .category
                .as_deref()
                .map_or(true, |category| txn.category == category)
        })
        .filter(|txn| {
            criteria
                .amount_range
                .map_or(true, |range| range.contains(txn.amount))
        })
        .cloned()
        .collect();

    match criteria.sort_order {
        SortOrder::Ascending => rows.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Descending => rows.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    rows
}

/// Distinct categories over the full transaction set, in first-appearance
/// order. Deliberately independent of any active filter so the option list
/// never shrinks while filters are applied.
pub fn category_options(all: &[Transaction]) -> Vec<String> {
    let mut seen = Vec::new();
    for txn in all {
        if !seen.iter().any(|known| known == &txn.category) {
            seen.push(txn.category.clone());
        }
    }
    seen
}

/// Which account tables are expanded. Accounts start collapsed and toggle
/// independently of one another.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Visibility {
    expanded: HashMap<i64, bool>,
}

impl Visibility {
    pub fn is_expanded(&self, account_id: i64) -> bool {
        self.expanded.get(&account_id).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, account_id: i64) {
        let entry = self.expanded.entry(account_id).or_insert(false);
        *entry = !*entry;
    }
}
