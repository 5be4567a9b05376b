//! Shared Dioxus components and D3.js bridge for the species catalog apps.
//!
//! This crate provides:
//! - `js_bridge`: the D3 bar chart wrappers via `js_sys::eval()` and a text fetch helper
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (mode toggle, chart container, species dialog, ...)

pub mod components;
pub mod js_bridge;
pub mod state;
