//! The pure filter, sort and summary logic at the core of the application.
//!
//! Everything in this module is synchronous and free of I/O: the caller
//! loads a user's records from a store, reads the clock if it needs a
//! reference month or day, and passes both in. That keeps the engine
//! trivially testable and safe for concurrent read access.

mod filter;
mod month;
mod sort;
mod summary;

pub use filter::{FilterCriteria, filter};
pub use month::MonthKey;
pub use sort::{SortKey, sort};
pub use summary::{Summary, summarize};
