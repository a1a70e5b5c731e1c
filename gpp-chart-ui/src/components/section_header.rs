//! Section heading with an optional caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub caption: String,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 8px 0 12px 0;",
            h1 {
                style: "margin: 0; font-size: 32px; font-weight: 500;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #888;",
                    "{props.caption}"
                }
            }
        }
    }
}
