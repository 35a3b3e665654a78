//! Cumulative championship standings up to a cutoff round.

use crate::season::SeasonIndex;
use serde::Serialize;

/// One driver's running points total, one entry per round in [`Standings::rounds`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitorTotals {
    pub driver: String,
    pub totals: Vec<f64>,
}

/// Running totals for every driver over the rounds up to a cutoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standings {
    /// The time axis: every season round `<= cutoff`, ascending.
    pub rounds: Vec<u32>,
    /// One entry per driver, in first-seen order.
    pub series: Vec<CompetitorTotals>,
}

impl Standings {
    pub fn totals_for(&self, driver: &str) -> Option<&[f64]> {
        self.series
            .iter()
            .find(|s| s.driver == driver)
            .map(|s| s.totals.as_slice())
    }

    /// Drivers ordered by their total at the last round, highest first.
    pub fn leaderboard(&self) -> Vec<(&str, f64)> {
        let mut board: Vec<(&str, f64)> = self
            .series
            .iter()
            .map(|s| (s.driver.as_str(), s.totals.last().copied().unwrap_or(0.0)))
            .collect();
        board.sort_by(|a, b| b.1.total_cmp(&a.1));
        board
    }
}

/// Every driver's points total after each round `<= cutoff`.
///
/// A round without a record for a driver adds nothing to that driver's sum,
/// so every curve is non-decreasing and all curves share the same length.
pub fn cumulative_standings(index: &SeasonIndex, cutoff: u32) -> Standings {
    let rounds = index.rounds_through(cutoff).to_vec();

    let series = index
        .competitors()
        .iter()
        .map(|driver| {
            let mut sum = 0.0;
            let totals = rounds
                .iter()
                .map(|&round| {
                    sum += index.record(driver, round).map_or(0.0, |r| r.points);
                    sum
                })
                .collect();
            CompetitorTotals {
                driver: driver.clone(),
                totals,
            }
        })
        .collect();

    Standings { rounds, series }
}
