//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Whether the data load is still in flight
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels
    #[props(default = 600)]
    pub min_height: u32,
}

/// A full-width div that D3.js clears and redraws into.
///
/// The loading overlay sits beside the chart div, not inside it, so D3's
/// `innerHTML = ''` never removes it.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%; height: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading animals..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%; min-height: {props.min_height}px;",
            }
        }
    }
}
