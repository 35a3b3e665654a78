//! Reusable Dioxus RSX components for the season dashboard.

mod chart_container;
mod chart_header;
mod driver_hero;
mod driver_selector;
mod error_display;
mod loading_spinner;
mod round_slider;
mod summary_cards;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use driver_hero::DriverHero;
pub use driver_selector::DriverSelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use round_slider::RoundSlider;
pub use summary_cards::SummaryCards;
