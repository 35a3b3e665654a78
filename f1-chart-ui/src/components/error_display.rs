//! Fatal startup error panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Locations that were tried, listed under the message
    #[props(default)]
    pub tried: Vec<String>,
}

/// Replaces the whole dashboard when the season data cannot be used.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            class: "season-error",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-left: 4px solid #C62828; border-radius: 4px;",
            strong { "Dashboard unavailable" }
            p { style: "margin: 4px 0 0 0;", "{props.message}" }
            if !props.tried.is_empty() {
                ul {
                    style: "margin: 6px 0 0 0; padding-left: 20px; font-size: 12px; color: #8E2424;",
                    for location in props.tried.iter() {
                        li { code { "{location}" } }
                    }
                }
            }
        }
    }
}
