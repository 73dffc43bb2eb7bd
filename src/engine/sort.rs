//! Orders an expense list by one of the supported sort keys.

use std::str::FromStr;

use time::Date;

use crate::{Error, models::ExpenseRecord};

/// The key and direction a list view is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Oldest expense first.
    DateAscending,
    /// Newest expense first. The default view order.
    #[default]
    DateDescending,
    /// Cheapest expense first.
    AmountAscending,
    /// Most expensive first.
    AmountDescending,
    /// Titles in lexical order.
    TitleAscending,
    /// Titles in reverse lexical order.
    TitleDescending,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "date-asc" => Ok(SortKey::DateAscending),
            "date-desc" => Ok(SortKey::DateDescending),
            "amount-asc" => Ok(SortKey::AmountAscending),
            "amount-desc" => Ok(SortKey::AmountDescending),
            "title-asc" => Ok(SortKey::TitleAscending),
            "title-desc" => Ok(SortKey::TitleDescending),
            _ => Err(Error::InvalidSortKey(text.to_owned())),
        }
    }
}

/// Order `records` by `key`.
///
/// The sort is stable, records that compare equal keep their original
/// relative order. Dates compare as calendar dates, falling back to the day
/// the record was created when the expense date is absent. Titles compare
/// case-insensitively.
pub fn sort(mut records: Vec<ExpenseRecord>, key: SortKey) -> Vec<ExpenseRecord> {
    match key {
        SortKey::DateAscending => records.sort_by(|a, b| sort_date(a).cmp(&sort_date(b))),
        SortKey::DateDescending => records.sort_by(|a, b| sort_date(b).cmp(&sort_date(a))),
        SortKey::AmountAscending => records.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
        SortKey::AmountDescending => records.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
        SortKey::TitleAscending => records.sort_by(|a, b| title_key(a).cmp(&title_key(b))),
        SortKey::TitleDescending => records.sort_by(|a, b| title_key(b).cmp(&title_key(a))),
    }

    records
}

fn sort_date(record: &ExpenseRecord) -> Date {
    record.date.unwrap_or_else(|| record.created_at.date())
}

fn title_key(record: &ExpenseRecord) -> String {
    record.title.to_lowercase()
}

#[cfg(test)]
mod sort_tests {
    use time::macros::date;

    use crate::{
        Error,
        engine::{SortKey, sort},
        models::{Category, ExpenseRecord},
        test_utils::expense_record,
    };

    fn sample_records() -> Vec<ExpenseRecord> {
        vec![
            expense_record(1, "Groceries", 100.0, Category::Food, Some(date!(2024 - 01 - 10))),
            expense_record(2, "Takeaway", 200.0, Category::Food, Some(date!(2024 - 01 - 20))),
            expense_record(3, "Bus fare", 50.0, Category::Transport, Some(date!(2024 - 02 - 01))),
        ]
    }

    fn ids(records: &[ExpenseRecord]) -> Vec<i64> {
        records.iter().map(|record| record.id).collect()
    }

    #[test]
    fn parses_every_sort_key() {
        let cases = [
            ("date-asc", SortKey::DateAscending),
            ("date-desc", SortKey::DateDescending),
            ("amount-asc", SortKey::AmountAscending),
            ("amount-desc", SortKey::AmountDescending),
            ("title-asc", SortKey::TitleAscending),
            ("title-desc", SortKey::TitleDescending),
        ];

        for (text, want) in cases {
            assert_eq!(text.parse(), Ok(want));
        }

        assert_eq!(
            "newest".parse::<SortKey>(),
            Err(Error::InvalidSortKey("newest".to_owned()))
        );
    }

    #[test]
    fn sorts_by_amount_descending() {
        let sorted = sort(sample_records(), SortKey::AmountDescending);

        let amounts: Vec<f64> = sorted.iter().map(|record| record.amount).collect();
        assert_eq!(amounts, vec![200.0, 100.0, 50.0]);
    }

    #[test]
    fn sorts_by_date_ascending() {
        let sorted = sort(sample_records(), SortKey::DateAscending);

        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn sorts_by_title_case_insensitively() {
        let mut records = sample_records();
        records[0].title = "takeout".to_owned();

        let sorted = sort(records, SortKey::TitleAscending);

        // "Bus fare" < "takeaway" < "takeout" when case is ignored.
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn undated_records_fall_back_to_creation_date() {
        let mut records = sample_records();
        // Created 2024-01-01 (the fixture timestamp), so it sorts first.
        records[1].date = None;

        let sorted = sort(records, SortKey::DateAscending);

        assert_eq!(ids(&sorted), vec![2, 1, 3]);
    }

    #[test]
    fn ties_preserve_original_order() {
        let mut records = sample_records();
        for record in &mut records {
            record.amount = 10.0;
        }

        let sorted = sort(records, SortKey::AmountDescending);

        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let sorted = sort(sample_records(), SortKey::AmountDescending);
        let sorted_again = sort(sorted.clone(), SortKey::AmountDescending);

        assert_eq!(sorted_again, sorted);
    }
}
