//! F1 Season Dashboard
//!
//! Shows one driver's per-round points and finishing positions next to the
//! running championship totals of every driver, both limited to a cutoff
//! round chosen with a slider.
//!
//! Data flow:
//! 1. On mount, `races_2025.json` is fetched from the first candidate location
//!    that serves a JSON array (`./data/` first, then the site root).
//! 2. The corpus is indexed and wrapped in a `Dashboard`, which starts on the
//!    first driver in the file at the last round and draws both charts.
//! 3. The driver dropdown and round slider call the `Dashboard` transitions,
//!    which recompute both series and redraw both charts synchronously.
//!
//! If no location serves valid data, or the data is empty, only the error is
//! shown: no selectors and no charts.

use f1_chart_ui::charts::{slot_placeholder, D3Charts, RACE_CHART_ID, STANDINGS_CHART_ID};
use f1_chart_ui::components::{
    ChartContainer, ChartHeader, DriverHero, DriverSelector, ErrorDisplay, LoadingSpinner,
    RoundSlider, SummaryCards,
};
use f1_chart_ui::fetch::BrowserSource;
use f1_chart_ui::js_bridge;
use f1_chart_ui::state::{startup_message, AppState};
use f1_season::chart::ChartSlot;
use f1_season::loader::{load_corpus, DEFAULT_CANDIDATES};
use f1_season::{Dashboard, DashboardError};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("season-standings-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load data once on mount. No retry: a failure here is final.
    use_effect(move || {
        spawn(async move {
            match start_dashboard().await {
                Ok(dashboard) => {
                    log::info!(
                        "Dashboard ready: {} drivers, {} rounds",
                        dashboard.index().competitors().len(),
                        dashboard.index().rounds().len()
                    );
                    state.dashboard.set(Some(dashboard));
                    state.loading.set(false);
                }
                Err(e) => state.fail(startup_message(&e)),
            }
        });
    });

    let race_placeholder = state
        .dashboard
        .read()
        .as_ref()
        .map_or("", |d| slot_placeholder(d.charts(), ChartSlot::Race));

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h1 { style: "margin: 0 0 8px 0; font-size: 22px;", "F1 2025 Season" }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay {
                    message: err,
                    tried: DEFAULT_CANDIDATES.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
                }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 24px; align-items: center;",
                    DriverSelector {}
                    RoundSlider {}
                }

                DriverHero {}
                SummaryCards {}

                ChartHeader {
                    title: "Results by Round".to_string(),
                    subtitle: "Bars: points scored · Line: finishing position (right axis, P1 at top)".to_string(),
                }
                ChartContainer {
                    id: RACE_CHART_ID.to_string(),
                    min_height: 360,
                    empty_message: race_placeholder.to_string(),
                }

                ChartHeader {
                    title: "Cumulative Points".to_string(),
                    subtitle: "Running championship total after each round, all drivers".to_string(),
                }
                ChartContainer {
                    id: STANDINGS_CHART_ID.to_string(),
                    min_height: 360,
                }
            }
        }
    }
}

/// Load the season and draw the first charts. A failure here is final.
async fn start_dashboard() -> Result<Dashboard<D3Charts>, DashboardError> {
    let corpus = load_corpus(&BrowserSource, &DEFAULT_CANDIDATES[..]).await?;
    js_bridge::init_charts();
    Dashboard::new(corpus, D3Charts)
}
