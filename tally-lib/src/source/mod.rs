//! Retrieval of the counter value
//!
//! The rest of the tool only depends on the [`CounterSource`] capability, which yields one
//! integer per call. [`PageSource`] is the production implementation: it downloads a
//! web page and reads the counter out of a specific element of its markup.
//!
//! The selector is tightly coupled to the page's structure. When the page changes, the
//! fetch fails with [`FetchError::Parse`] rather than producing a wrong value.

mod counter_source;
mod fetch_error;
mod page_source;

pub use counter_source::CounterSource;
pub use fetch_error::FetchError;
pub use page_source::{DEFAULT_COUNTER_SELECTOR, DEFAULT_PAGE_URL, PageSource, parse_counter};
