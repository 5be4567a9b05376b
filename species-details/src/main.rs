//! Species Gallery
//!
//! Shows one card per species record with a "Learn More" dialog. The dialog
//! offers an edit button to the record's author only.
//!
//! Data flow:
//! 1. The species rows are embedded at compile time (`fixtures/species.json`)
//!    and stand in for the backend query that would normally supply them.
//! 2. The viewer id comes from the page URL, e.g. `?viewer=<user id>`.
//!    Without it nobody is the author, so no edit buttons appear.
//! 3. Edit requests from a dialog are logged and shown as a notice.

use dioxus::prelude::*;
use species_core::species::SAMPLE_SPECIES_JSON;
use species_core::{parse_species_json, EditRequest};
use species_ui::components::{ErrorDisplay, LoadingSpinner, SpeciesCard};
use species_ui::state::AppState;

/// Query parameter carrying the viewer id.
const VIEWER_PARAM: &str = "viewer";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("species-details-root"))
        .launch(App);
}

/// Read `?viewer=` from the current URL, empty if absent.
fn viewer_from_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get(VIEWER_PARAM))
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        match parse_species_json(SAMPLE_SPECIES_JSON) {
            Ok(rows) => state.species.set(rows),
            Err(e) => {
                log::error!("Failed to load species: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load species data: {:#}", e)));
            }
        }
        let viewer = viewer_from_url();
        if viewer.is_empty() {
            log::info!("No viewer id in URL; browsing anonymously");
        }
        state.viewer_id.set(viewer);
        state.loading.set(false);
    });

    let viewer_id = (state.viewer_id)();
    let species = state.species.read().clone();

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",
            h1 { style: "font-size: 24px; margin: 0 0 12px 0;", "Species List" }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if let Some(notice) = state.edit_notice.read().as_ref() {
                div {
                    role: "status",
                    style: "padding: 10px 14px; margin: 8px 0; background: #EFF6FF; color: #1D4ED8; border-radius: 6px; border: 1px solid #BFDBFE;",
                    "{notice}"
                }
            }

            if *state.loading.read() {
                LoadingSpinner { label: "Loading species...".to_string() }
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; justify-content: center;",
                    for (position, record) in species.into_iter().enumerate() {
                        SpeciesCard {
                            key: "{record.list_key(position)}",
                            species: record.clone(),
                            viewer_id: viewer_id.clone(),
                            on_edit: move |request: EditRequest| {
                                log::info!(
                                    "Edit hand-off: {} by viewer {}",
                                    request.record.scientific_name,
                                    request.viewer_id
                                );
                                state.edit_notice.set(Some(format!(
                                    "Opening editor for {}",
                                    request.record.scientific_name
                                )));
                            },
                        }
                    }
                }
            }
        }
    }
}
