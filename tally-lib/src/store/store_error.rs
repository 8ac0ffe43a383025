use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reading or writing the observation log.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The log file exists but could not be read.
    #[error("unable to read observation log '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log file content is not a serialized observation log.
    #[error("unable to decode observation log '{}'", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The log could not be written back.
    #[error("unable to write observation log '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
