//! Race result records and the loaded corpus.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// One driver's classified result in one round.
///
/// Mirrors the objects in `races_<season>.json`. Fields not listed here are
/// ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Round number within the season (1-based).
    pub round: u32,
    /// Race label, e.g. "Bahrain Grand Prix".
    pub race: String,
    /// Driver display name; doubles as the competitor identifier.
    pub driver: String,
    /// Championship points scored in this round.
    pub points: f64,
    /// Finishing position.
    pub position: u32,
    /// Season year, written by the results fetcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
}

impl ResultRecord {
    pub fn new(round: u32, race: &str, driver: &str, points: f64, position: u32) -> Self {
        Self {
            round,
            race: race.to_string(),
            driver: driver.to_string(),
            points,
            position,
            season: None,
        }
    }

    /// What makes this record unusable, if anything: rounds and positions
    /// start at 1 and points are finite and never negative.
    pub fn range_violation(&self) -> Option<&'static str> {
        if self.round == 0 {
            Some("round must be at least 1")
        } else if self.position == 0 {
            Some("position must be at least 1")
        } else if !self.points.is_finite() || self.points < 0.0 {
            Some("points must be a non-negative number")
        } else {
            None
        }
    }
}

/// The full set of loaded records, in file order.
///
/// Immutable once built and cheap to clone, so the index and the app state
/// can share it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Corpus {
    records: Arc<[ResultRecord]>,
}

impl Corpus {
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }
}

impl From<Vec<ResultRecord>> for Corpus {
    fn from(records: Vec<ResultRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }
}

impl Deref for Corpus {
    type Target = [ResultRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}
