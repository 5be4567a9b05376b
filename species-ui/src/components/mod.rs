//! Reusable Dioxus RSX components for the species catalog apps.

mod chart_container;
mod display_mode_toggle;
mod error_display;
mod loading_spinner;
mod species_card;
mod species_details_dialog;

pub use chart_container::ChartContainer;
pub use display_mode_toggle::DisplayModeToggle;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use species_card::SpeciesCard;
pub use species_details_dialog::SpeciesDetailsDialog;
