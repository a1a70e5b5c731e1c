//! Chart container component that Plotly renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id Plotly renders into
    pub id: String,
    /// Minimum height in pixels
    #[props(default = 450)]
    pub min_height: u32,
    /// Keep the container mounted but invisible (inactive tab)
    #[props(default = false)]
    pub hidden: bool,
}

/// A sized div for a Plotly chart.
///
/// Hidden containers stay in the DOM so their chart is already rendered
/// when shown; call `js_bridge::resize_chart` after revealing one.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let display = if props.hidden { "none" } else { "block" };
    let style = format!(
        "display: {}; min-height: {}px; width: 100%;",
        display, props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
