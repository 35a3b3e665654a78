//! Placeholder shown while the season file is fetched.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading race data…".to_string())]
    pub label: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            "aria-busy": "true",
            style: "display: flex; flex-direction: column; align-items: center; gap: 8px; padding: 40px; color: #666;",
            div {
                style: "width: 120px; height: 4px; border-radius: 2px; background: linear-gradient(90deg, #e10600 0%, #FF9F1C 100%); opacity: 0.6;",
            }
            "{props.label}"
        }
    }
}
