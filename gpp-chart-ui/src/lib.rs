//! Shared Dioxus components and Plotly.js bridge for the power plant dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Plotly.js rendering via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (navbar, cards, tabs, selector, containers)

pub mod components;
pub mod js_bridge;
pub mod state;
