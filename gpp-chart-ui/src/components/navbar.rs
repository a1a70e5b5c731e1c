//! Top navigation bar.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    pub brand: String,
}

#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    rsx! {
        nav {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 30px; background: #78C2AD; color: white;",
            a {
                href: "#",
                style: "color: white; font-size: 20px; text-decoration: none;",
                "{props.brand}"
            }
            a {
                href: "#",
                style: "color: rgba(255, 255, 255, 0.8); text-decoration: none;",
                "Home"
            }
        }
    }
}
