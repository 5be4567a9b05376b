//! Gallery card for one species.

use crate::components::SpeciesDetailsDialog;
use dioxus::prelude::*;
use species_core::{EditRequest, SpeciesRecord};

/// Card with the species image, names and a "Learn More" dialog trigger.
#[component]
pub fn SpeciesCard(
    species: SpeciesRecord,
    viewer_id: String,
    on_edit: EventHandler<EditRequest>,
) -> Element {
    let image = species.image().map(str::to_string);
    let common_name = species.common_name().map(str::to_string);
    let preview = species
        .description()
        .map(|d| d.chars().take(150).collect::<String>());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; width: 280px; padding: 12px; border: 1px solid #e5e7eb; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.08);",
            if let Some(src) = image {
                img {
                    src: "{src}",
                    alt: "{species.scientific_name}",
                    style: "width: 100%; height: 160px; object-fit: cover; border-radius: 6px;",
                }
            }
            h3 { style: "margin: 8px 0 0 0; font-size: 18px;", "{species.scientific_name}" }
            if let Some(name) = common_name {
                p { style: "margin: 2px 0; font-style: italic; color: #4b5563;", "{name}" }
            }
            if let Some(text) = preview {
                p { style: "margin: 6px 0; font-size: 13px; color: #374151;", "{text}" }
            }
            div {
                style: "margin-top: auto;",
                SpeciesDetailsDialog {
                    species: species.clone(),
                    viewer_id: viewer_id.clone(),
                    on_edit: on_edit,
                }
            }
        }
    }
}
