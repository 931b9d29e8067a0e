use reqwest::StatusCode;
use thiserror::Error;

/// Failure of one of the read calls against the content API
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS or timeout failure before a response arrived
    #[error("failed to fetch {resource}: {source}")]
    Transport {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status
    #[error("failed to fetch {resource}: server returned {status}")]
    Status {
        resource: &'static str,
        status: StatusCode,
    },

    /// No property with this id exists remotely
    #[error("property {0} not found")]
    NotFound(u64),

    /// The body did not match the expected shape
    #[error("failed to decode {resource}: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}
