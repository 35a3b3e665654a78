//! Range slider for the cutoff round.

use crate::state::AppState;
use dioxus::prelude::*;

/// Cutoff slider spanning the first to the last round of the season.
///
/// Values are clamped here; the dashboard does not re-validate them.
#[component]
pub fn RoundSlider() -> Element {
    let mut state = use_context::<AppState>();
    let (min, max, cutoff) = match &*state.dashboard.read() {
        Some(dashboard) => {
            let index = dashboard.index();
            (
                index.min_round().unwrap_or(1),
                index.max_round().unwrap_or(1),
                dashboard.selection().cutoff,
            )
        }
        None => return rsx! {},
    };

    let on_input = move |evt: Event<FormData>| {
        if let Ok(round) = evt.value().parse::<u32>() {
            if let Some(dashboard) = state.dashboard.write().as_mut() {
                dashboard.set_cutoff(round.clamp(min, max));
            }
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                r#for: "round-slider",
                style: "font-weight: bold;",
                "Through round: "
            }
            input {
                id: "round-slider",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{cutoff}",
                oninput: on_input,
            }
            span {
                id: "round-value",
                style: "min-width: 2em; font-variant-numeric: tabular-nums;",
                "{cutoff}"
            }
        }
    }
}
