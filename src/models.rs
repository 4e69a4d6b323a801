use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The authenticated identity. This is the one value the client persists
/// across reloads; everything else is refetched per session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub is_premium: bool,
}

impl User {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub balance: f64,
}

/// A single ledger entry. Immutable once fetched; the backend sends the full
/// set for the user and the client scopes it per account.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Transaction {
    #[serde(rename = "transaction_id")]
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

/// Backend-computed spending aggregates. The client renders these as-is and
/// never recomputes them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct InsightBundle {
    pub weekly_spending: Vec<WeeklySpending>,
    pub top_categories: Vec<CategoryTotal>,
    pub top_merchants: Vec<MerchantTotal>,
    pub average_transaction: f64,
    pub expensive_transactions: Vec<FlaggedTransaction>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeeklySpending {
    pub range: String,
    pub total: f64,
    /// Week-over-week change in percent. Absent for the first week.
    #[serde(default)]
    pub change: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MerchantTotal {
    pub merchant: String,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FlaggedTransaction {
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}
