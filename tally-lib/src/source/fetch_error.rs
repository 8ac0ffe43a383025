use thiserror::Error;

/// Failures retrieving the counter.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed.
    #[error("unable to fetch '{url}'")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with something other than 200.
    #[error("wrong status {code} from '{url}'")]
    Status { url: String, code: u16 },

    /// The page did not contain a readable counter.
    #[error("unable to read the counter from the page: {reason}")]
    Parse { reason: String },
}

impl FetchError {
    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        Self::Parse { reason: reason.into() }
    }
}
