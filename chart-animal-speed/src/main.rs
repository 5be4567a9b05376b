//! Animal Speed Comparison
//!
//! Bar chart of animal speeds, either one bar per animal or one bar per diet
//! type showing the average speed of that group.
//!
//! Data flow:
//! 1. On mount: fetch `sample_animals.csv` once (served from `public/`) and
//!    parse it into usable records. A failed fetch leaves the record list empty.
//! 2. Whenever the records or the display mode change: rebuild the chart
//!    payload from the full record list and redraw the D3 chart from scratch.

use dioxus::prelude::*;
use species_core::{load_records, ChartPayload};
use species_ui::components::{ChartContainer, DisplayModeToggle};
use species_ui::js_bridge;
use species_ui::state::AppState;

/// Fixed location of the animals CSV.
const SAMPLE_ANIMALS_URL: &str = "/sample_animals.csv";

/// DOM id for the D3 chart container div.
const CHART_ID: &str = "animal-speed-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("animal-speed-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: one load per mount ───
    use_effect(move || {
        js_bridge::init_charts();
        spawn(async move {
            let records = match js_bridge::fetch_text(SAMPLE_ANIMALS_URL).await {
                Ok(csv_data) => load_records(&csv_data),
                Err(e) => {
                    log::warn!("Animal data unavailable, chart stays empty: {}", e);
                    Vec::new()
                }
            };
            state.records.set(records);
            state.loading.set(false);
        });
    });

    // ─── Effect 2: full redraw on any change to records or mode ───
    use_effect(move || {
        let loading = (state.loading)();
        let mode = (state.display_mode)();
        let records = state.records.read();

        if loading {
            return;
        }

        let payload = ChartPayload::build(&records, mode);
        log::info!(
            "[Species Debug] chart: drawing {} bars in {} mode",
            payload.bars.len(),
            mode
        );
        js_bridge::draw_speed_chart(CHART_ID, &payload);
    });

    rsx! {
        div {
            style: "width: 100%; height: 100%; min-height: 600px; padding: 16px; box-sizing: border-box; font-family: system-ui, -apple-system, sans-serif;",
            DisplayModeToggle {}
            ChartContainer {
                id: CHART_ID.to_string(),
                loading: *state.loading.read(),
                min_height: 600,
            }
        }
    }
}
