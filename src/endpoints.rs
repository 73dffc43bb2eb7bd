//! The API endpoint URIs.

/// The route to create (POST) or clear (DELETE) the session cookie.
pub const SESSION: &str = "/api/session";
/// The route to list (GET) or record (POST) expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to delete an expense.
pub const DELETE_EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route for the dashboard summary statistics.
pub const SUMMARY: &str = "/api/summary";
/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
