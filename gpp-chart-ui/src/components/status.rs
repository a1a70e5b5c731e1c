//! Loading and error placeholders shown instead of the dashboard body.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #888;",
            "Loading power plant dataset..."
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// A load failure is fatal: the dashboard shows this panel and no charts.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 16px 30px; background: #F8D7DA; color: #721C24; border-radius: 4px; border: 1px solid #F5C6CB;",
            strong { "Failed to start: " }
            "{props.message}"
        }
    }
}
