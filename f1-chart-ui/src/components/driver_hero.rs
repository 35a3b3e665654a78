//! Hero panel for the selected driver: number, flag, team and headline stats.

use crate::profiles;
use crate::state::AppState;
use dioxus::prelude::*;
use f1_season::summary::format_points;

/// Drivers without a profile get no hero.
#[component]
pub fn DriverHero() -> Element {
    let state = use_context::<AppState>();
    let dashboard = state.dashboard.read();
    let Some(dashboard) = dashboard.as_ref() else {
        return rsx! {};
    };
    let view = dashboard.view();
    let driver = view.selection.competitor.clone();
    let Some(profile) = profiles::profile(&driver) else {
        return rsx! {};
    };

    let total = format_points(view.hero.total);
    let average = view.hero.average.clone();
    let rounds = view.hero.rounds;
    let style = format!(
        "{} border-left: 6px solid {}; padding: 12px 16px; margin: 8px 0; border-radius: 8px; \
         background: #fafafa; transform: translate(calc(var(--heroShiftX) / 6), calc(var(--heroShiftY) / 6)); \
         box-shadow: 0 0 24px rgba(0, 0, 0, var(--heroGlow));",
        motion_style(view.progress),
        profile.color
    );

    rsx! {
        div {
            class: "driver-hero",
            style: "{style}",
            div {
                style: "display: flex; align-items: baseline; gap: 16px;",
                span {
                    style: "font-size: 48px; font-weight: 800; color: {profile.color};",
                    "{profile.number}"
                }
                div {
                    h2 { style: "margin: 0;", "{driver} {profile.flag}" }
                    p { style: "margin: 0; color: #555;", "{profile.tagline}" }
                }
            }
            div {
                style: "display: flex; gap: 24px; margin-top: 8px;",
                HeroMeta { label: "Team".to_string(), value: profile.team.to_string() }
                HeroMeta { label: "Rounds".to_string(), value: rounds.to_string() }
                HeroMeta { label: "Points / Avg".to_string(), value: format!("{} · {}", total, average) }
            }
        }
    }
}

#[component]
fn HeroMeta(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "driver-meta",
            div { style: "font-size: 11px; color: #777; text-transform: uppercase;", "{label}" }
            div { style: "font-weight: 700;", "{value}" }
        }
    }
}

/// CSS custom properties that drift the hero as the cutoff moves through
/// the season.
pub(crate) fn motion_style(progress: f64) -> String {
    format!(
        "--heroShiftX: {}px; --heroShiftY: {}px; --heroGlow: {:.3};",
        (-30.0 + progress * 60.0).round(),
        (-16.0 + progress * 32.0).round(),
        0.05 + progress * 0.2
    )
}
