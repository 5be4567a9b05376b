//! Core data layer for the species catalog.
//!
//! This crate is shared by the WASM apps and the native CLI:
//! - `animal`: CSV parsing of animal speed rows into [`AnimalRecord`]s
//! - `aggregate`: per-diet speed averages
//! - `display`: display modes and the JSON payloads for the D3 bar chart
//! - `species`: backend species rows and population formatting
//! - `presenter`: what the species detail dialog shows to a given viewer
//!
//! # Usage
//!
//! ```rust
//! use species_core::{load_records, ChartDataset, DisplayMode};
//!
//! let records = load_records("Animal,Diet,Average Speed (km/h)\nCheetah,Carnivore,120\n");
//! let dataset = ChartDataset::select(&records, DisplayMode::Grouped);
//! assert_eq!(dataset.len(), 1);
//! ```

pub mod aggregate;
pub mod animal;
pub mod display;
pub mod presenter;
pub mod species;

pub use aggregate::{compute_diet_averages, DietAggregate};
pub use animal::{load_records, AnimalRecord, Diet};
pub use display::{ChartConfig, ChartDataset, ChartPayload, DisplayMode};
pub use presenter::{EditRequest, SpeciesDetailView};
pub use species::{parse_species_json, SpeciesRecord};
