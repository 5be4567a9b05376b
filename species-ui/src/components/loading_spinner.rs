//! Loading placeholder.

use dioxus::prelude::*;

/// Centered loading text.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading data...".to_string())] label: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{label}"
        }
    }
}
