//! The dashboard: season index, selection, derived views, and chart slots.
//!
//! Every selector event goes through [`Dashboard::apply`]: the next
//! selection is built, all derived views are computed from it alone, both
//! charts are replaced, and only then are selection and view swapped in.
//! Nothing is cached between events.

use crate::chart::{
    ChartPayload, ChartSlot, ChartSlots, ChartSurface, RaceChartPayload, StandingsChartPayload,
};
use crate::error::{DashboardError, Result};
use crate::record::{Corpus, ResultRecord};
use crate::season::SeasonIndex;
use crate::selection::Selection;
use crate::series::filtered_series;
use crate::standings::{cumulative_standings, Standings};
use crate::summary::{HeroStats, SeriesSummary};

/// Everything derived from one [`Selection`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selection: Selection,
    pub series: Vec<ResultRecord>,
    pub standings: Standings,
    pub hero: HeroStats,
    pub summary: Option<SeriesSummary>,
    /// Cutoff position within the season, 0.0 at the first round.
    pub progress: f64,
}

impl DashboardView {
    pub fn compute(index: &SeasonIndex, selection: Selection) -> Self {
        let series = filtered_series(index, &selection.competitor, selection.cutoff);
        let standings = cumulative_standings(index, selection.cutoff);
        Self {
            hero: HeroStats::from_series(&series),
            summary: SeriesSummary::from_series(&series),
            progress: selection.progress(index),
            selection,
            series,
            standings,
        }
    }

    fn race_payload(&self) -> Option<ChartPayload> {
        RaceChartPayload::from_series(&self.series).map(ChartPayload::Race)
    }

    fn standings_payload(&self, index: &SeasonIndex) -> ChartPayload {
        ChartPayload::Standings(StandingsChartPayload::from_standings(index, &self.standings))
    }
}

pub struct Dashboard<S: ChartSurface> {
    index: SeasonIndex,
    view: DashboardView,
    charts: ChartSlots<S>,
}

impl<S: ChartSurface> Dashboard<S> {
    /// Index the corpus, select the first driver at the last round, and draw
    /// both charts.
    pub fn new(corpus: Corpus, surface: S) -> Result<Self> {
        let index = SeasonIndex::new(corpus);
        let selection = Selection::initial(&index).ok_or(DashboardError::EmptyDataset)?;
        let view = DashboardView::compute(&index, selection);

        let mut dashboard = Self {
            index,
            view,
            charts: ChartSlots::new(surface),
        };
        dashboard.render();
        Ok(dashboard)
    }

    /// Driver selector transition.
    pub fn select_competitor(&mut self, competitor: &str) {
        let next = self.view.selection.with_competitor(competitor);
        self.apply(next);
    }

    /// Round slider transition.
    pub fn set_cutoff(&mut self, cutoff: u32) {
        let next = self.view.selection.with_cutoff(cutoff);
        self.apply(next);
    }

    fn apply(&mut self, next: Selection) {
        log::debug!(
            "Selection -> {} through round {}",
            next.competitor,
            next.cutoff
        );
        self.view = DashboardView::compute(&self.index, next);
        self.render();
    }

    fn render(&mut self) {
        match self.view.race_payload() {
            Some(payload) => self.charts.show(&payload),
            None => self.charts.clear(ChartSlot::Race),
        }
        let standings = self.view.standings_payload(&self.index);
        self.charts.show(&standings);
    }

    pub fn index(&self) -> &SeasonIndex {
        &self.index
    }

    pub fn selection(&self) -> &Selection {
        &self.view.selection
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn charts(&self) -> &ChartSlots<S> {
        &self.charts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::recording::{RecordingSurface, SurfaceCall};
    use crate::fixtures;

    fn last_payload(dashboard: &Dashboard<RecordingSurface>, slot: ChartSlot) -> Option<ChartPayload> {
        dashboard
            .charts()
            .surface()
            .calls
            .iter()
            .rev()
            .find_map(|call| match call {
                SurfaceCall::Create(p) if p.slot() == slot => Some(p.clone()),
                _ => None,
            })
    }

    #[test]
    fn starts_on_first_driver_at_last_round() {
        let dashboard = Dashboard::new(fixtures::two_rounds_with_gap(), RecordingSurface::default()).unwrap();
        assert_eq!(dashboard.selection().competitor, "Max Verstappen");
        assert_eq!(dashboard.selection().cutoff, 2);
        assert!(dashboard.charts().is_live(ChartSlot::Race));
        assert!(dashboard.charts().is_live(ChartSlot::Standings));
    }

    #[test]
    fn empty_corpus_is_fatal() {
        let result = Dashboard::new(Corpus::default(), RecordingSurface::default());
        assert!(matches!(result, Err(DashboardError::EmptyDataset)));
    }

    #[test]
    fn selecting_a_driver_recomputes_everything() {
        let mut dashboard = Dashboard::new(fixtures::opening_round(), RecordingSurface::default()).unwrap();
        dashboard.select_competitor("Lando Norris");

        let view = dashboard.view();
        assert_eq!(view.series.len(), 1);
        assert_eq!(view.series[0].points, 18.0);
        assert_eq!(view.series[0].position, 2);
        assert_eq!(view.hero.total, 18.0);
        assert_eq!(view.hero.average, "18.0");

        match last_payload(&dashboard, ChartSlot::Race) {
            Some(ChartPayload::Race(p)) => assert_eq!(p.driver, "Lando Norris"),
            other => panic!("unexpected race payload {:?}", other),
        }
    }

    #[test]
    fn cutoff_change_keeps_driver_and_trims_both_series() {
        let mut dashboard = Dashboard::new(fixtures::unordered_season(), RecordingSurface::default()).unwrap();
        dashboard.set_cutoff(2);

        let view = dashboard.view();
        assert_eq!(view.selection.competitor, "Lando Norris");
        assert_eq!(view.series.iter().map(|r| r.round).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(view.standings.rounds, vec![1, 2]);
        assert_eq!(view.hero.total, 30.0);
    }

    #[test]
    fn unknown_driver_degrades_to_empty_race_chart() {
        let mut dashboard = Dashboard::new(fixtures::opening_round(), RecordingSurface::default()).unwrap();
        dashboard.select_competitor("Oscar Piastri");

        let view = dashboard.view();
        assert!(view.series.is_empty());
        assert!(view.summary.is_none());
        assert_eq!(view.hero.average, "0.0");
        assert!(!dashboard.charts().is_live(ChartSlot::Race));
        assert!(dashboard.charts().is_live(ChartSlot::Standings));
        assert_eq!(view.standings.series.len(), 2);
    }

    #[test]
    fn every_update_replaces_each_chart_exactly_once() {
        let mut dashboard = Dashboard::new(fixtures::two_rounds_with_gap(), RecordingSurface::default()).unwrap();
        dashboard.set_cutoff(1);
        dashboard.select_competitor("Lando Norris");

        let calls = &dashboard.charts().surface().calls;
        // initial render: 2 creates; each update: 2 destroys + 2 creates
        assert_eq!(calls.len(), 2 + 4 + 4);
        assert!(matches!(calls[2], SurfaceCall::Destroy(ChartSlot::Race)));
        assert!(matches!(calls[3], SurfaceCall::Create(ChartPayload::Race(_))));
        assert_eq!(dashboard.charts().surface().live_count(), 2);
    }

    #[test]
    fn view_matches_a_fresh_computation() {
        let mut dashboard = Dashboard::new(fixtures::unordered_season(), RecordingSurface::default()).unwrap();
        dashboard.set_cutoff(1);
        dashboard.select_competitor("Max Verstappen");
        dashboard.set_cutoff(10);

        let fresh = DashboardView::compute(dashboard.index(), dashboard.selection().clone());
        assert_eq!(dashboard.view(), &fresh);
    }

    #[test]
    fn standings_scenario_through_round_two() {
        let dashboard = Dashboard::new(fixtures::two_rounds_with_gap(), RecordingSurface::default()).unwrap();
        let standings = &dashboard.view().standings;
        assert_eq!(standings.totals_for("Lando Norris"), Some(&[18.0, 18.0][..]));
        assert_eq!(standings.totals_for("Max Verstappen"), Some(&[25.0, 50.0][..]));
    }
}
