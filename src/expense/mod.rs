//! The HTTP endpoints for recording, listing, deleting and summarising
//! expenses.
//!
//! Handlers are thin: they resolve the session, call the store, and hand the
//! records to the [engine](crate::engine). They never recompute filtering or
//! aggregation themselves, the engine's outputs are the only data a client
//! may consume.

mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;
mod summary_endpoint;

#[cfg(test)]
pub(crate) mod test_utils;

pub use create_endpoint::create_expense;
pub use delete_endpoint::delete_expense;
pub use list_endpoint::list_expenses;
pub use summary_endpoint::get_summary;
