//! Tab strip switching between the ranking and distribution charts.

use crate::state::{AppState, ChartTab};
use dioxus::prelude::*;

#[component]
pub fn ChartTabs() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();

    rsx! {
        div {
            style: "display: flex; gap: 4px; border-bottom: 1px solid #DEE2E6; margin-bottom: 8px;",
            for tab in ChartTab::ALL {
                button {
                    key: "{tab.label()}",
                    style: if tab == active {
                        "padding: 8px 16px; border: 1px solid #DEE2E6; border-bottom: 2px solid #78C2AD; background: white; color: #5A5A5A; cursor: pointer; font-weight: bold;"
                    } else {
                        "padding: 8px 16px; border: 1px solid transparent; background: none; color: #78C2AD; cursor: pointer;"
                    },
                    onclick: move |_| state.active_tab.set(tab),
                    "{tab.label()}"
                }
            }
        }
    }
}
