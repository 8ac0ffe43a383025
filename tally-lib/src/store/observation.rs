use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One reading of the tracked counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// When the reading was taken, in the local time of the run.
    #[serde(rename = "Date")]
    pub timestamp: DateTime<FixedOffset>,

    /// The counter value. Expected to be non-negative, not enforced.
    #[serde(rename = "Yesterday")]
    pub value: i64,
}

impl Observation {
    #[must_use]
    pub const fn new(timestamp: DateTime<FixedOffset>, value: i64) -> Self {
        Self { timestamp, value }
    }
}
