//! Pure decision logic and query dispatch for the search session.

pub mod markup;
pub mod merge;
pub mod paging;
pub mod query;

pub use query::{refresh_suggestions, submit_search};
