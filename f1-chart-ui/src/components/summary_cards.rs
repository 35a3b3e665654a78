//! Summary cards: total, average, best and worst round.

use crate::state::AppState;
use dioxus::prelude::*;
use f1_season::summary::format_points;

/// Empty when the selected driver has no results up to the cutoff.
#[component]
pub fn SummaryCards() -> Element {
    let state = use_context::<AppState>();
    let summary = state
        .dashboard
        .read()
        .as_ref()
        .and_then(|d| d.view().summary.clone());
    let Some(summary) = summary else {
        return rsx! { div { id: "summary" } };
    };

    let total = format_points(summary.total);
    let best_worst = format!("{} / {}", format_points(summary.best), format_points(summary.worst));

    rsx! {
        div {
            id: "summary",
            style: "display: flex; gap: 12px; margin: 8px 0;",
            Card { title: "Total Points".to_string(), value: total }
            Card { title: "Average".to_string(), value: summary.average }
            Card { title: "Best / Worst".to_string(), value: best_worst }
        }
    }
}

#[component]
fn Card(title: String, value: String) -> Element {
    rsx! {
        div {
            style: "flex: 1; padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
            strong { "{title}" }
            br {}
            "{value}"
        }
    }
}
