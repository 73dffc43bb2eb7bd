//! Filters an expense list down to the records matching a set of view
//! criteria.

use crate::{
    engine::MonthKey,
    models::{Category, ExpenseRecord},
};

/// The criteria a list view filters by.
///
/// Each criterion is optional and an absent (or empty) criterion matches
/// every record, so the default criteria are the identity filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring to look for in titles and descriptions.
    pub search_term: Option<String>,
    /// Keep only records with exactly this category.
    pub category: Option<Category>,
    /// Keep only records dated within this month. Records without a date
    /// never match a month criterion.
    pub month: Option<MonthKey>,
}

/// Return the records matching every supplied criterion, preserving their
/// relative order.
pub fn filter(records: &[ExpenseRecord], criteria: &FilterCriteria) -> Vec<ExpenseRecord> {
    let needle = criteria
        .search_term
        .as_deref()
        .map(str::to_lowercase)
        .filter(|term| !term.is_empty());

    records
        .iter()
        .filter(|record| {
            let search_matches = needle.as_deref().is_none_or(|needle| {
                record.title.to_lowercase().contains(needle)
                    || record
                        .description
                        .as_deref()
                        .is_some_and(|description| description.to_lowercase().contains(needle))
            });

            let category_matches = criteria
                .category
                .is_none_or(|category| record.category == category);

            let month_matches = criteria
                .month
                .is_none_or(|month| record.date.is_some_and(|date| month.contains(date)));

            search_matches && category_matches && month_matches
        })
        .cloned()
        .collect()
}
