//! Global Power Plant Dashboard Analytics
//!
//! Single-page dashboard over the global power plant dataset:
//! - three summary cards (countries, plants, most used fuel)
//! - a choropleth of plants per country, animated over start years
//! - per-country ranking and distribution charts (tabs) and a fuel share donut,
//!   all driven by the "Select Country" dropdown
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/power_plant.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed and loaded into an in-memory SQLite database;
//!    the summary cards and dropdown options are computed once.
//! 4. The map is rendered once; the three country charts re-render whenever
//!    `selected_country` changes.

use dioxus::prelude::*;
use gpp_chart_ui::components::{
    ChartContainer, ChartTabs, CountrySelector, ErrorDisplay, LoadingSpinner, Navbar,
    SectionHeader, StatCard,
};
use gpp_chart_ui::js_bridge;
use gpp_chart_ui::state::{AppState, ChartTab};
use gpp_charts::Dashboard;

/// The power plant dataset.
const POWER_PLANT_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/power_plant.csv"));

/// Chart container DOM element IDs used by Plotly to render into.
const MAP_CHART_ID: &str = "power-plant-map";
const RANKING_CHART_ID: &str = "plot-ranking";
const DISTRIBUTION_CHART_ID: &str = "plot-distribution";
const FUEL_CHART_ID: &str = "plot-fuel-share";

const BRAND: &str = "Global Power Plant Dashboard Analytics";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("power-plant-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset on mount
    use_effect(move || {
        match Dashboard::from_csv_str(POWER_PLANT_CSV) {
            Ok(dashboard) => {
                match dashboard.countries() {
                    Ok(countries) => state.countries.set(countries),
                    Err(e) => {
                        log::error!("Failed to list countries: {}", e);
                        state.error_msg.set(Some(format!("Failed to list countries: {}", e)));
                        state.loading.set(false);
                        return;
                    }
                }
                state.summary.set(Some(dashboard.summary().clone()));
                state.dashboard.set(Some(dashboard));
                state.loading.set(false);
            }
            Err(e) => {
                log::error!("Failed to load power plant dataset: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load power plant dataset: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // Render the map once the dataset is loaded
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let dashboard = match &*state.dashboard.read() {
            Some(dashboard) => dashboard.clone(),
            None => return,
        };

        js_bridge::init_charts();
        match dashboard.map_chart() {
            Ok(map) => js_bridge::render_chart(MAP_CHART_ID, &map),
            Err(e) => log::warn!("No map available: {}", e),
        }
    });

    // Re-render the three country charts whenever the selection changes
    use_effect(move || {
        let country = (state.selected_country)();
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let dashboard = match &*state.dashboard.read() {
            Some(dashboard) => dashboard.clone(),
            None => return,
        };

        match dashboard.select_country(&country) {
            Ok(charts) => {
                js_bridge::render_chart(RANKING_CHART_ID, &charts.ranking);
                js_bridge::render_chart(DISTRIBUTION_CHART_ID, &charts.distribution);
                js_bridge::render_chart(FUEL_CHART_ID, &charts.fuel_share);
            }
            Err(e) => log::warn!("Failed to build charts for {}: {}", country, e),
        }
    });

    // Charts rendered while their tab was hidden need a resize once shown
    use_effect(move || {
        match (state.active_tab)() {
            ChartTab::Ranking => js_bridge::resize_chart(RANKING_CHART_ID),
            ChartTab::Distribution => js_bridge::resize_chart(DISTRIBUTION_CHART_ID),
        }
    });

    let active_tab = (state.active_tab)();

    rsx! {
        div {
            style: "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #5A5A5A;",

            Navbar { brand: BRAND.to_string() }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "padding: 16px 30px;",

                    // Row 1: summary cards and map
                    div {
                        style: "display: flex; gap: 24px;",
                        div {
                            style: "flex: 0 0 25%;",
                            if let Some(summary) = (state.summary)() {
                                for card in summary.cards() {
                                    StatCard {
                                        key: "{card.header}",
                                        header: card.header.to_string(),
                                        value: card.value.clone(),
                                        color: card.color.to_string(),
                                    }
                                }
                            }
                        }
                        div {
                            style: "flex: 1;",
                            ChartContainer { id: MAP_CHART_ID.to_string(), min_height: 500 }
                        }
                    }

                    hr {}

                    // Row 2: per-country analysis
                    div {
                        style: "display: flex; gap: 24px;",
                        div {
                            style: "flex: 0 0 65%;",
                            SectionHeader { title: "Analysis by Country".to_string() }
                            ChartTabs {}
                            ChartContainer {
                                id: RANKING_CHART_ID.to_string(),
                                hidden: active_tab != ChartTab::Ranking,
                            }
                            ChartContainer {
                                id: DISTRIBUTION_CHART_ID.to_string(),
                                hidden: active_tab != ChartTab::Distribution,
                            }
                        }
                        div {
                            style: "flex: 1;",
                            CountrySelector {}
                            ChartContainer { id: FUEL_CHART_ID.to_string() }
                        }
                    }
                }
            }
        }
    }
}
