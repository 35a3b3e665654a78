//! D3.js implementation of the dashboard's chart surface.

use crate::js_bridge;
use crate::profiles;
use f1_season::chart::{
    ChartPayload, ChartSlot, ChartSlots, ChartSurface, RaceChartPayload, StandingsChartPayload,
};
use std::collections::BTreeMap;

/// DOM id of the per-round chart container.
pub const RACE_CHART_ID: &str = "race-chart";
/// DOM id of the cumulative standings chart container.
pub const STANDINGS_CHART_ID: &str = "standings-chart";

const CHART_HEIGHT: u32 = 360;

const NO_RACE_RESULTS: &str = "No results for this driver up to the selected round";

/// Text to show in place of a slot that holds no chart, or "" while a chart
/// is drawn. Only the race slot can be left empty.
pub fn slot_placeholder<S: ChartSurface>(charts: &ChartSlots<S>, slot: ChartSlot) -> &'static str {
    match slot {
        ChartSlot::Race if !charts.is_live(slot) => NO_RACE_RESULTS,
        _ => "",
    }
}

/// Renders chart payloads into fixed DOM containers via the JS bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct D3Charts;

impl D3Charts {
    pub fn container_id(slot: ChartSlot) -> &'static str {
        match slot {
            ChartSlot::Race => RACE_CHART_ID,
            ChartSlot::Standings => STANDINGS_CHART_ID,
        }
    }
}

impl ChartSurface for D3Charts {
    fn create(&mut self, payload: &ChartPayload) {
        let container = Self::container_id(payload.slot());
        match payload {
            ChartPayload::Race(p) => {
                js_bridge::render_race_chart(container, &to_json(p), &to_json(&race_config(p)))
            }
            ChartPayload::Standings(p) => js_bridge::render_standings_chart(
                container,
                &to_json(p),
                &to_json(&standings_config(p)),
            ),
        }
    }

    fn destroy(&mut self, slot: ChartSlot) {
        js_bridge::destroy_chart(Self::container_id(slot));
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Bar color follows the driver's accent; the position line stays black.
pub fn race_config(payload: &RaceChartPayload) -> serde_json::Value {
    serde_json::json!({
        "color": profiles::accent_color(&payload.driver),
        "pointsLabel": "Race Points",
        "positionLabel": "Finish Position",
        "height": CHART_HEIGHT,
    })
}

/// One accent per driver; drivers without a profile use the fallback.
pub fn standings_config(payload: &StandingsChartPayload) -> serde_json::Value {
    let colors: BTreeMap<&str, &str> = payload
        .series
        .iter()
        .map(|s| (s.driver.as_str(), profiles::accent_color(&s.driver)))
        .collect();
    serde_json::json!({
        "colors": colors,
        "fallbackColor": profiles::FALLBACK_ACCENT,
        "height": CHART_HEIGHT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use f1_season::standings::CompetitorTotals;

    #[test]
    fn race_config_uses_driver_accent() {
        let payload = RaceChartPayload {
            driver: "Lando Norris".to_string(),
            labels: vec!["BAH".to_string()],
            titles: vec!["Round 1 · Bahrain GP".to_string()],
            points: vec![18.0],
            positions: vec![2],
        };
        let config = race_config(&payload);
        assert_eq!(config["color"], "#FF9F1C");
        assert_eq!(config["positionLabel"], "Finish Position");
    }

    #[test]
    fn standings_config_falls_back_for_unknown_drivers() {
        let payload = StandingsChartPayload {
            labels: vec![],
            titles: vec![],
            series: vec![
                CompetitorTotals {
                    driver: "Max Verstappen".to_string(),
                    totals: vec![],
                },
                CompetitorTotals {
                    driver: "Oscar Piastri".to_string(),
                    totals: vec![],
                },
            ],
        };
        let config = standings_config(&payload);
        assert_eq!(config["colors"]["Max Verstappen"], "#e10600");
        assert_eq!(config["colors"]["Oscar Piastri"], "#2563eb");
    }

    #[derive(Default)]
    struct NullSurface;

    impl ChartSurface for NullSurface {
        fn create(&mut self, _payload: &ChartPayload) {}
        fn destroy(&mut self, _slot: ChartSlot) {}
    }

    fn race_payload() -> ChartPayload {
        ChartPayload::Race(RaceChartPayload {
            driver: "Lando Norris".to_string(),
            labels: vec!["BAH".to_string()],
            titles: vec!["Round 1 · Bahrain GP".to_string()],
            points: vec![18.0],
            positions: vec![2],
        })
    }

    #[test]
    fn placeholder_only_for_an_empty_race_slot() {
        let mut charts = ChartSlots::new(NullSurface);
        assert_eq!(slot_placeholder(&charts, ChartSlot::Race), NO_RACE_RESULTS);
        assert_eq!(slot_placeholder(&charts, ChartSlot::Standings), "");

        charts.show(&race_payload());
        assert_eq!(slot_placeholder(&charts, ChartSlot::Race), "");

        charts.clear(ChartSlot::Race);
        assert_eq!(slot_placeholder(&charts, ChartSlot::Race), NO_RACE_RESULTS);
    }

    #[test]
    fn slots_map_to_containers() {
        assert_eq!(D3Charts::container_id(ChartSlot::Race), "race-chart");
        assert_eq!(D3Charts::container_id(ChartSlot::Standings), "standings-chart");
    }
}
