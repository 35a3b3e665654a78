//! Loading the result corpus from the first working candidate location.
//!
//! The dashboard ships its data next to the page, but the file may live
//! under `data/` or at the site root depending on how it was deployed, so
//! the loader walks an ordered list of locations. A location that answers
//! with an error status, unparseable JSON, or a non-array document is
//! skipped; the first one holding an array of result records wins.
//!
//! The transport is abstracted behind [`Source`] so the same loop runs on
//! browser `fetch`, reqwest, or the local filesystem.

use crate::error::{LoadError, SourceError};
use crate::record::{Corpus, ResultRecord};

/// Where the dashboard looks for its data, in order.
pub const DEFAULT_CANDIDATES: [&str; 2] = ["./data/races_2025.json", "./races_2025.json"];

/// Fetches the raw body stored at a location.
///
/// Implementations map a non-success status to [`SourceError::Status`] and
/// must not cache.
#[allow(async_fn_in_trait)]
pub trait Source {
    async fn fetch(&self, location: &str) -> Result<String, SourceError>;
}

/// Try each candidate in order and return the first valid corpus.
///
/// When every candidate fails, the error of the last one is returned.
pub async fn load_corpus<S, L>(source: &S, candidates: &[L]) -> Result<Corpus, LoadError>
where
    S: Source,
    L: AsRef<str>,
{
    let mut last_error = None;

    for candidate in candidates {
        let location: &str = candidate.as_ref();
        let attempt = match source.fetch(location).await {
            Ok(body) => parse_corpus(location, &body),
            Err(e) => Err(e),
        };
        match attempt {
            Ok(corpus) => {
                log::info!("Loaded {} results from {}", corpus.len(), location);
                return Ok(corpus);
            }
            Err(e) => {
                log::warn!("Skipping data location {}: {}", location, e);
                last_error = Some(e);
            }
        }
    }

    Err(last_error.map_or(LoadError::NoCandidates, LoadError::AllCandidatesFailed))
}

/// Parse a response body into a corpus, checking that it is a JSON array of
/// result records whose values are in range.
pub fn parse_corpus(location: &str, body: &str) -> Result<Corpus, SourceError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|source| SourceError::InvalidJson {
            location: location.to_string(),
            source,
        })?;

    if !value.is_array() {
        return Err(SourceError::NotAnArray {
            location: location.to_string(),
        });
    }

    let records: Vec<ResultRecord> =
        serde_json::from_value(value).map_err(|source| SourceError::InvalidRecords {
            location: location.to_string(),
            source,
        })?;

    if let Some((index, reason)) = records
        .iter()
        .enumerate()
        .find_map(|(i, r)| r.range_violation().map(|reason| (i, reason)))
    {
        return Err(SourceError::OutOfRange {
            location: location.to_string(),
            index,
            reason,
        });
    }
    Ok(Corpus::from(records))
}
