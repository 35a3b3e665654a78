//! The two dashboard selectors as one immutable value.

use crate::season::SeasonIndex;
use serde::Serialize;

/// Active driver and inclusive cutoff round.
///
/// Never edited in place: each selector event produces a new value via
/// [`Selection::with_competitor`] or [`Selection::with_cutoff`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub competitor: String,
    pub cutoff: u32,
}

impl Selection {
    /// First driver seen and the last round of the season.
    ///
    /// `None` when the index has no records.
    pub fn initial(index: &SeasonIndex) -> Option<Self> {
        Some(Self {
            competitor: index.competitors().first()?.clone(),
            cutoff: index.max_round()?,
        })
    }

    /// Same cutoff, different driver.
    pub fn with_competitor(&self, competitor: &str) -> Self {
        Self {
            competitor: competitor.to_string(),
            cutoff: self.cutoff,
        }
    }

    /// Same driver, different cutoff. The caller is responsible for bounds.
    pub fn with_cutoff(&self, cutoff: u32) -> Self {
        Self {
            competitor: self.competitor.clone(),
            cutoff,
        }
    }

    /// Where the cutoff sits between the first and last round, in `0.0..=1.0`
    /// for in-range cutoffs.
    pub fn progress(&self, index: &SeasonIndex) -> f64 {
        let (Some(min), Some(max)) = (index.min_round(), index.max_round()) else {
            return 0.0;
        };
        let span = max.saturating_sub(min).max(1) as f64;
        (self.cutoff as f64 - min as f64) / span
    }
}
