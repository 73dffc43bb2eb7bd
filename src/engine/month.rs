//! A calendar month key for grouping and filtering expenses.

use std::{fmt::Display, str::FromStr};

use time::Date;

use crate::Error;

/// One calendar month, e.g. "2024-02".
///
/// Used to group expenses by the month they occurred in and to filter a list
/// view down to a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    year: i32,
    month: u8,
}

impl MonthKey {
    /// The month that `date` falls in.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }

    /// Whether `date` falls within this month.
    pub fn contains(self, date: Date) -> bool {
        Self::from_date(date) == self
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let error = || Error::InvalidMonth(text.to_owned());

        let (year_text, month_text) = text.split_once('-').ok_or_else(error)?;

        if year_text.len() != 4 || month_text.len() != 2 {
            return Err(error());
        }

        let year = year_text.parse().map_err(|_| error())?;
        let month: u8 = month_text.parse().map_err(|_| error())?;

        if !(1..=12).contains(&month) {
            return Err(error());
        }

        Ok(Self { year, month })
    }
}

impl Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
