//! Chart payloads and the per-slot chart lifecycle.
//!
//! The dashboard owns two chart slots. A rendering surface (D3.js in the
//! browser, a recorder in tests) implements [`ChartSurface`]; [`ChartSlots`]
//! makes sure a slot's previous chart is destroyed before a new one is
//! created, so each slot holds at most one live chart.

use crate::record::ResultRecord;
use crate::season::{race_code, SeasonIndex};
use crate::standings::{CompetitorTotals, Standings};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    /// Points bars and finishing-position line for the selected driver.
    Race,
    /// Running totals for every driver.
    Standings,
}

impl ChartSlot {
    fn index(self) -> usize {
        match self {
            ChartSlot::Race => 0,
            ChartSlot::Standings => 1,
        }
    }
}

/// Per-round data for the selected driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceChartPayload {
    pub driver: String,
    /// Race codes, e.g. `["BAH", "SAU"]`.
    pub labels: Vec<String>,
    /// Tooltip titles, e.g. `"Round 1 · Bahrain GP"`.
    pub titles: Vec<String>,
    pub points: Vec<f64>,
    pub positions: Vec<u32>,
}

impl RaceChartPayload {
    /// `None` for an empty series: the slot stays empty.
    pub fn from_series(series: &[ResultRecord]) -> Option<Self> {
        let driver = series.first()?.driver.clone();
        Some(Self {
            driver,
            labels: series.iter().map(|r| race_code(&r.race)).collect(),
            titles: series.iter().map(|r| round_title(r.round, &r.race)).collect(),
            points: series.iter().map(|r| r.points).collect(),
            positions: series.iter().map(|r| r.position).collect(),
        })
    }
}

/// Running totals for all drivers on a shared round axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsChartPayload {
    pub labels: Vec<String>,
    pub titles: Vec<String>,
    pub series: Vec<CompetitorTotals>,
}

impl StandingsChartPayload {
    pub fn from_standings(index: &SeasonIndex, standings: &Standings) -> Self {
        Self {
            labels: standings
                .rounds
                .iter()
                .map(|&r| race_code(index.race_name(r)))
                .collect(),
            titles: standings
                .rounds
                .iter()
                .map(|&r| round_title(r, index.race_name(r)))
                .collect(),
            series: standings.series.clone(),
        }
    }
}

fn round_title(round: u32, race: &str) -> String {
    format!("Round {} · {}", round, race)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartPayload {
    Race(RaceChartPayload),
    Standings(StandingsChartPayload),
}

impl ChartPayload {
    pub fn slot(&self) -> ChartSlot {
        match self {
            ChartPayload::Race(_) => ChartSlot::Race,
            ChartPayload::Standings(_) => ChartSlot::Standings,
        }
    }
}

/// Something that can draw and tear down charts.
pub trait ChartSurface {
    /// Build a chart for `payload` in `payload.slot()`. The slot is empty.
    fn create(&mut self, payload: &ChartPayload);

    /// Tear down the chart currently in `slot`.
    fn destroy(&mut self, slot: ChartSlot);
}

/// Tracks which slots hold a live chart on a [`ChartSurface`].
#[derive(Debug)]
pub struct ChartSlots<S> {
    surface: S,
    live: [bool; 2],
}

impl<S: ChartSurface> ChartSlots<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            live: [false; 2],
        }
    }

    /// Replace whatever is in the payload's slot with a chart for `payload`.
    pub fn show(&mut self, payload: &ChartPayload) {
        let slot = payload.slot();
        self.clear(slot);
        self.surface.create(payload);
        self.live[slot.index()] = true;
    }

    /// Destroy the chart in `slot`, if any.
    pub fn clear(&mut self, slot: ChartSlot) {
        if self.live[slot.index()] {
            self.surface.destroy(slot);
            self.live[slot.index()] = false;
        }
    }

    pub fn is_live(&self, slot: ChartSlot) -> bool {
        self.live[slot.index()]
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
