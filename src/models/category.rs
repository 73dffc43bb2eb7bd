//! This file defines the `Category` type, the closed set of labels an
//! expense can be filed under.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// The category of an expense.
///
/// Unlike free-form tags, the set of categories is fixed. [Category::ALL]
/// defines the canonical order, which is used to break ties when picking the
/// top spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries and eating out.
    Food,
    /// Public transport, fuel and ride shares.
    Transport,
    /// General shopping.
    Shopping,
    /// Movies, concerts, subscriptions and the like.
    Entertainment,
    /// Recurring household bills.
    Bills,
    /// Medical expenses.
    Health,
    /// Courses, books and tuition.
    Education,
    /// Holidays and trips.
    Travel,
    /// Anything that does not fit the above.
    Other,
}

impl Category {
    /// Every category in canonical order.
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Health,
        Category::Education,
        Category::Travel,
        Category::Other,
    ];

    /// The lowercase name of the category as it appears on the wire and in
    /// the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::Bills => "bills",
            Category::Health => "health",
            Category::Education => "education",
            Category::Travel => "travel",
            Category::Other => "other",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == text)
            .ok_or_else(|| Error::UnknownCategory(text.to_owned()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
