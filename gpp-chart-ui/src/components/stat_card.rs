//! Summary card with a header and one large figure.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub header: String,
    pub value: String,
    /// CSS colour name for the card background
    #[props(default = "white".to_string())]
    pub color: String,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            style: "background: {props.color}; border: 1px solid rgba(0, 0, 0, 0.125); border-radius: 4px; margin-bottom: 16px;",
            div {
                style: "padding: 8px 16px; border-bottom: 1px solid rgba(0, 0, 0, 0.125); background: rgba(0, 0, 0, 0.03);",
                "{props.header}"
            }
            div {
                style: "padding: 16px;",
                h1 {
                    style: "margin: 0; font-size: 32px; font-weight: 500;",
                    "{props.value}"
                }
            }
        }
    }
}
