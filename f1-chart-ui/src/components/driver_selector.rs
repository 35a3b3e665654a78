//! Dropdown selector for choosing the active driver.

use crate::state::AppState;
use dioxus::prelude::*;

/// Driver dropdown selector.
/// Lists drivers in data order and switches the dashboard on change.
#[component]
pub fn DriverSelector() -> Element {
    let mut state = use_context::<AppState>();
    let (drivers, selected) = match &*state.dashboard.read() {
        Some(dashboard) => (
            dashboard.index().competitors().to_vec(),
            dashboard.selection().competitor.clone(),
        ),
        None => return rsx! {},
    };

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if let Some(dashboard) = state.dashboard.write().as_mut() {
            dashboard.select_competitor(&value);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "driver-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Driver: "
            }
            select {
                id: "driver-select",
                onchange: on_change,
                for driver in drivers.iter() {
                    option {
                        value: "{driver}",
                        selected: *driver == selected,
                        "{driver}"
                    }
                }
            }
        }
    }
}
