//! Segmented toggle between the grouped and individual speed charts.

use crate::state::AppState;
use dioxus::prelude::*;
use species_core::DisplayMode;

const ACTIVE_STYLE: &str = "padding: 4px 12px; border: none; border-radius: 6px; font-size: 14px; font-weight: 500; cursor: pointer; background: #fff; color: #2563eb; box-shadow: 0 1px 2px rgba(0,0,0,0.1);";
const INACTIVE_STYLE: &str = "padding: 4px 12px; border: none; border-radius: 6px; font-size: 14px; font-weight: 500; cursor: pointer; background: transparent; color: #4b5563;";

/// Two buttons, "By Diet Type" and "By Animal". Clicking one sets the mode.
#[component]
pub fn DisplayModeToggle() -> Element {
    let state = use_context::<AppState>();
    let current = (state.display_mode)();

    rsx! {
        div {
            style: "margin-bottom: 12px; display: flex; justify-content: center; align-items: center;",
            div {
                style: "display: inline-flex; gap: 2px; padding: 4px; border: 1px solid #d1d5db; border-radius: 8px; background: #f3f4f6;",
                for mode in DisplayMode::ALL {
                    button {
                        key: "{mode}",
                        style: if mode == current { ACTIVE_STYLE } else { INACTIVE_STYLE },
                        onclick: move |_| {
                            let mut display_mode = state.display_mode;
                            if *display_mode.peek() != mode {
                                log::info!("[Species Debug] display mode -> {}", mode);
                                display_mode.set(mode);
                            }
                        },
                        "{mode.label()}"
                    }
                }
            }
        }
    }
}
