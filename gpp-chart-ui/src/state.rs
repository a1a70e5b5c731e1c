//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//!
//! `selected_country` is the only value that changes after startup; the
//! dashboard, the dropdown options and the summary cards are set once when
//! the dataset loads.

use dioxus::prelude::*;
use gpp_charts::{Dashboard, DatasetSummary};
use gpp_core::DEFAULT_COUNTRY;

/// Tabs of the "Analysis by Country" section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartTab {
    Ranking,
    Distribution,
}

impl ChartTab {
    pub const ALL: [ChartTab; 2] = [ChartTab::Ranking, ChartTab::Distribution];

    pub fn label(&self) -> &'static str {
        match self {
            ChartTab::Ranking => "Ranking",
            ChartTab::Distribution => "Distribution",
        }
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected country long name
    pub selected_country: Signal<String>,
    /// Dropdown options
    pub countries: Signal<Vec<String>>,
    /// Startup summary cards
    pub summary: Signal<Option<DatasetSummary>>,
    pub active_tab: Signal<ChartTab>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_country: Signal::new(DEFAULT_COUNTRY.to_string()),
            countries: Signal::new(Vec::new()),
            summary: Signal::new(None),
            active_tab: Signal::new(ChartTab::Ranking),
        }
    }
}
