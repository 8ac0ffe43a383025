//! The persisted observation log
//!
//! Every run adds exactly one [`Observation`] to an [`ObservationLog`] kept in a JSON
//! file. The log is append-only and ordered by insertion, which is also chronological
//! order since a run stamps its observation with the current time.
//!
//! The file format is shared with logs written by earlier versions of the tool: a JSON
//! array of `{"Date": ..., "Yesterday": ...}` objects, indented with tabs and without a
//! trailing newline. Saving a freshly loaded log reproduces the same bytes, so the file
//! diffs cleanly from one day to the next.

mod observation;
mod observation_log;
mod store_error;

pub use observation::Observation;
pub use observation_log::ObservationLog;
pub use store_error::StoreError;
