//! Computes summary statistics over a user's full expense list.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    engine::MonthKey,
    models::{Category, ExpenseRecord},
};

/// The summary statistics shown on a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of every recorded expense.
    pub total: f64,
    /// The sum of expenses dated within the reference month.
    pub monthly_total: f64,
    /// How many distinct categories have at least one expense.
    pub category_count: usize,
    /// The mean of the per-calendar-month totals. Note that this averages
    /// over the months that have expenses, not over records.
    pub avg_monthly: f64,
    /// The sum of expenses dated on the reference day.
    pub today_total: f64,
    /// The category with the highest total spend, `None` when there are no
    /// expenses. Ties go to the category listed first in [Category::ALL].
    pub top_category: Option<Category>,
}

/// Summarise `records`, treating `current_month` and `today` as the
/// reference clock values.
///
/// The reference values are supplied by the caller so that this function
/// stays pure. Records without an expense date count towards [Summary::total]
/// and the category figures but are excluded from all date-keyed grouping.
/// The output does not depend on the order of `records`.
pub fn summarize(records: &[ExpenseRecord], current_month: MonthKey, today: Date) -> Summary {
    let mut total = 0.0;
    let mut monthly_total = 0.0;
    let mut today_total = 0.0;
    let mut month_totals: HashMap<MonthKey, f64> = HashMap::new();
    let mut category_totals: HashMap<Category, f64> = HashMap::new();

    for record in records {
        total += record.amount;
        *category_totals.entry(record.category).or_insert(0.0) += record.amount;

        if let Some(date) = record.date {
            let month = MonthKey::from_date(date);
            *month_totals.entry(month).or_insert(0.0) += record.amount;

            if month == current_month {
                monthly_total += record.amount;
            }

            if date == today {
                today_total += record.amount;
            }
        }
    }

    let avg_monthly = if month_totals.is_empty() {
        0.0
    } else {
        month_totals.values().sum::<f64>() / month_totals.len() as f64
    };

    let mut top_category: Option<(Category, f64)> = None;
    for category in Category::ALL {
        if let Some(&category_total) = category_totals.get(&category) {
            match top_category {
                Some((_, best)) if best >= category_total => {}
                _ => top_category = Some((category, category_total)),
            }
        }
    }

    Summary {
        total,
        monthly_total,
        category_count: category_totals.len(),
        avg_monthly,
        today_total,
        top_category: top_category.map(|(category, _)| category),
    }
}
