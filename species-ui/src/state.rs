//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use species_core::{AnimalRecord, DisplayMode, SpeciesRecord};

/// Shared application state for the species catalog apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Usable animal rows, replaced wholesale when a load completes
    pub records: Signal<Vec<AnimalRecord>>,
    /// Whether the initial load is still in flight
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Grouped averages or one bar per animal
    pub display_mode: Signal<DisplayMode>,
    /// Species rows supplied to the gallery
    pub species: Signal<Vec<SpeciesRecord>>,
    /// Id of the signed-in viewer, empty when anonymous
    pub viewer_id: Signal<String>,
    /// Last edit hand-off, shown as a notice
    pub edit_notice: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            records: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            display_mode: Signal::new(DisplayMode::default()),
            species: Signal::new(Vec::new()),
            viewer_id: Signal::new(String::new()),
            edit_notice: Signal::new(None),
        }
    }
}
