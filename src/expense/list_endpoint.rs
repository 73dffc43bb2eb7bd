//! The endpoint for listing expenses with the view criteria applied.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    engine::{self, FilterCriteria, SortKey},
    models::ExpenseRecord,
    session::Session,
    stores::ExpenseStore,
};

/// The query parameters of the expense list view.
///
/// All parameters are optional strings so that an empty control on the
/// client ("" from a cleared search box) behaves like an absent one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Substring to search titles and descriptions for.
    pub search: Option<String>,
    /// A category name to filter by.
    pub category: Option<String>,
    /// A `YYYY-MM` month to filter by.
    pub month: Option<String>,
    /// One of the sort keys, e.g. "amount-desc". Defaults to "date-desc".
    pub sort: Option<String>,
}

impl ListParams {
    fn criteria(&self) -> Result<FilterCriteria, Error> {
        let category = match self.trimmed(&self.category) {
            Some(text) => Some(text.parse()?),
            None => None,
        };

        let month = match self.trimmed(&self.month) {
            Some(text) => Some(text.parse()?),
            None => None,
        };

        Ok(FilterCriteria {
            search_term: self.trimmed(&self.search).map(str::to_owned),
            category,
            month,
        })
    }

    fn sort_key(&self) -> Result<SortKey, Error> {
        match self.trimmed(&self.sort) {
            Some(text) => text.parse(),
            None => Ok(SortKey::default()),
        }
    }

    fn trimmed<'a>(&self, value: &'a Option<String>) -> Option<&'a str> {
        value
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// The response body of the expense list view.
#[derive(Debug, Serialize)]
pub struct ExpenseListResponse {
    /// How many expenses matched the criteria.
    pub count: usize,
    /// The matching expenses in the requested order.
    pub expenses: Vec<ExpenseRecord>,
}

/// A route handler that loads the session user's expenses and applies the
/// requested filter and sort.
pub async fn list_expenses<S: ExpenseStore>(
    State(state): State<AppState<S>>,
    session: Session,
    Query(params): Query<ListParams>,
) -> Result<Json<ExpenseListResponse>, Error> {
    let criteria = params.criteria()?;
    let sort_key = params.sort_key()?;

    let records = state.store.load(&session.user_id)?;
    let expenses = engine::sort(engine::filter(&records, &criteria), sort_key);

    Ok(Json(ExpenseListResponse {
        count: expenses.len(),
        expenses,
    }))
}
