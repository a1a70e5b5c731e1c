//! Dropdown card for choosing the analysed country.

use crate::state::AppState;
use dioxus::prelude::*;

/// "Select Country" card.
/// Reads the options from AppState and updates selected_country on change.
/// The selected value is not validated; unknown countries give blank charts.
#[component]
pub fn CountrySelector() -> Element {
    let mut state = use_context::<AppState>();
    let countries = state.countries.read().clone();
    let selected = (state.selected_country)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_country.set(evt.value());
    };

    rsx! {
        div {
            style: "border: 1px solid #DEE2E6; border-radius: 4px; margin-bottom: 12px;",
            div {
                style: "padding: 8px 16px; background: #F7F7F9; border-bottom: 1px solid #DEE2E6;",
                label {
                    r#for: "country-select",
                    "Select Country"
                }
            }
            div {
                style: "padding: 16px;",
                select {
                    id: "country-select",
                    style: "width: 100%; padding: 6px;",
                    onchange: on_change,
                    for country in countries.iter() {
                        option {
                            key: "{country}",
                            value: "{country}",
                            selected: *country == selected,
                            "{country}"
                        }
                    }
                }
            }
        }
    }
}
