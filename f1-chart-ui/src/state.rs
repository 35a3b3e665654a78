//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! The selectors never write a selection signal directly: they call the
//! `Dashboard` transitions, which recompute both series and redraw both
//! charts before returning, so the rendered state is always consistent.

use crate::charts::D3Charts;
use f1_season::{Dashboard, DashboardError};
use dioxus::prelude::*;

/// Shared application state for the season dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dashboard (None until the data has loaded)
    pub dashboard: Signal<Option<Dashboard<D3Charts>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Record a fatal startup error and stop loading.
    pub fn fail(&mut self, message: String) {
        log::error!("{}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}

/// What the user sees when the dashboard cannot start.
pub fn startup_message(err: &DashboardError) -> String {
    match err {
        DashboardError::LoadFailure(e) => format!(
            "Failed to load race data. Check the data file location and path. ({})",
            e
        ),
        DashboardError::EmptyDataset => {
            "The race data file is empty (check races_2025.json).".to_string()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
