/// Error types for loading race data and starting the dashboard
use thiserror::Error;

/// Why a single candidate location did not produce a corpus.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The location answered with a non-success status
    #[error("HTTP {status} ({location})")]
    Status { location: String, status: u16 },

    /// The location could not be reached or read
    #[error("failed to read {location}: {message}")]
    Transport { location: String, message: String },

    /// The body was not valid JSON
    #[error("invalid JSON ({location}): {source}")]
    InvalidJson {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// The body was JSON but not an array
    #[error("invalid JSON array ({location})")]
    NotAnArray { location: String },

    /// The array elements did not match the result record shape
    #[error("invalid result records ({location}): {source}")]
    InvalidRecords {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record had the right shape but a value outside the data model
    #[error("result {index} out of range ({location}): {reason}")]
    OutOfRange {
        location: String,
        index: usize,
        reason: &'static str,
    },
}

impl SourceError {
    pub fn location(&self) -> &str {
        match self {
            SourceError::Status { location, .. }
            | SourceError::Transport { location, .. }
            | SourceError::InvalidJson { location, .. }
            | SourceError::NotAnArray { location }
            | SourceError::InvalidRecords { location, .. }
            | SourceError::OutOfRange { location, .. } => location,
        }
    }
}

/// Every candidate location failed.
#[derive(Error, Debug)]
pub enum LoadError {
    /// No locations were configured
    #[error("no data locations to try")]
    NoCandidates,

    /// All candidates failed; carries the most recent failure
    #[error("failed to load race data: {0}")]
    AllCandidatesFailed(#[source] SourceError),
}

/// Fatal startup conditions. Once a `Dashboard` exists none of these can occur.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// No candidate source yielded valid data
    #[error(transparent)]
    LoadFailure(#[from] LoadError),

    /// The data loaded but holds zero records
    #[error("race data is empty")]
    EmptyDataset,
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
