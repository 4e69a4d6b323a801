//! Projects the backend's opaque insight bundle into chart-ready rows. No
//! aggregation happens here — only formatting and indicator derivation.

use crate::format::{format_amount, format_date};
use crate::models::InsightBundle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
}

/// Week-over-week movement: direction plus the absolute percentage label.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeIndicator {
    pub direction: ChangeDirection,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeeklyRow {
    pub range: String,
    pub total: f64,
    pub amount: String,
    pub change: Option<ChangeIndicator>,
}

/// One labelled bar — a category or merchant with its spend.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesRow {
    pub label: String,
    pub total: f64,
    pub amount: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlaggedRow {
    pub name: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PresentedInsights {
    pub weekly: Vec<WeeklyRow>,
    pub categories: Vec<SeriesRow>,
    pub merchants: Vec<SeriesRow>,
    pub average_transaction: String,
    pub flagged: Vec<FlaggedRow>,
}

pub fn present(bundle: &InsightBundle) -> PresentedInsights {
    PresentedInsights {
        weekly: bundle
            .weekly_spending
            .iter()
            .map(|week| WeeklyRow {
                range: week.range.clone(),
                total: week.total,
                amount: format_amount(week.total),
                change: change_indicator(week.change),
            })
            .collect(),
        categories: bundle
            .top_categories
            .iter()
            .map(|entry| SeriesRow {
                label: entry.category.clone(),
                total: entry.total,
                amount: format_amount(entry.total),
            })
            .collect(),
        merchants: bundle
            .top_merchants
            .iter()
            .map(|entry| SeriesRow {
                label: entry.merchant.clone(),
                total: entry.total,
                amount: format_amount(entry.total),
            })
            .collect(),
        average_transaction: format_amount(bundle.average_transaction),
        flagged: bundle
            .expensive_transactions
            .iter()
            .map(|txn| FlaggedRow {
                name: txn.name.clone(),
                amount: format_amount(txn.amount),
                category: txn.category.clone(),
                date: format_date(txn.date),
            })
            .collect(),
    }
}

fn change_indicator(change: Option<f64>) -> Option<ChangeIndicator> {
    let change = change?;
    let direction = if change > 0.0 {
        ChangeDirection::Up
    } else {
        ChangeDirection::Down
    };
    Some(ChangeIndicator {
        direction,
        label: format!("{}%", change.abs()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CategoryTotal, FlaggedTransaction, MerchantTotal, WeeklySpending,
    };
    use chrono::NaiveDate;

    fn bundle() -> InsightBundle {
        InsightBundle {
            weekly_spending: vec![
                WeeklySpending {
                    range: "Jan 1 - Jan 7".to_string(),
                    total: 120.5,
                    change: None,
                },
                WeeklySpending {
                    range: "Jan 8 - Jan 14".to_string(),
                    total: 200.0,
                    change: Some(12.5),
                },
                WeeklySpending {
                    range: "Jan 15 - Jan 21".to_string(),
                    total: 150.0,
                    change: Some(-25.0),
                },
            ],
            top_categories: vec![CategoryTotal {
                category: "food".to_string(),
                total: 310.0,
            }],
            top_merchants: vec![MerchantTotal {
                merchant: "Corner Deli".to_string(),
                total: 90.25,
            }],
            average_transaction: 47.619,
            expensive_transactions: vec![FlaggedTransaction {
                name: "New laptop".to_string(),
                amount: 1450.0,
                category: "electronics".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
            }],
        }
    }

    #[test]
    fn amounts_are_rounded_to_two_decimals() {
        let presented = present(&bundle());
        assert_eq!(presented.weekly[0].amount, "$120.50");
        assert_eq!(presented.average_transaction, "$47.62");
        assert_eq!(presented.flagged[0].amount, "$1,450.00");
    }

    #[test]
    fn positive_change_points_up() {
        let presented = present(&bundle());
        let change = presented.weekly[1].change.as_ref().unwrap();
        assert_eq!(change.direction, ChangeDirection::Up);
        assert_eq!(change.label, "12.5%");
    }

    #[test]
    fn negative_change_points_down_with_absolute_label() {
        let presented = present(&bundle());
        let change = presented.weekly[2].change.as_ref().unwrap();
        assert_eq!(change.direction, ChangeDirection::Down);
        assert_eq!(change.label, "25%");
    }

    #[test]
    fn absent_change_renders_no_indicator() {
        let presented = present(&bundle());
        assert_eq!(presented.weekly[0].change, None);
    }

    #[test]
    fn flagged_rows_carry_display_dates() {
        let presented = present(&bundle());
        assert_eq!(presented.flagged[0].date, "Jan 9, 2024");
    }

    #[test]
    fn numeric_totals_survive_for_bar_sizing() {
        let presented = present(&bundle());
        assert_eq!(presented.weekly[1].total, 200.0);
        assert_eq!(presented.merchants[0].total, 90.25);
    }
}
