//! Reusable Dioxus RSX components for the power plant dashboard.

mod chart_container;
mod chart_tabs;
mod country_selector;
mod navbar;
mod section_header;
mod stat_card;
mod status;

pub use chart_container::ChartContainer;
pub use chart_tabs::ChartTabs;
pub use country_selector::CountrySelector;
pub use navbar::Navbar;
pub use section_header::SectionHeader;
pub use stat_card::StatCard;
pub use status::{ErrorDisplay, LoadingSpinner};
