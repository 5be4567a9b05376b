//! View model for the species detail dialog.
//!
//! [`SpeciesDetailView::render`] decides which fragments of a record are shown
//! and whether the viewer gets an edit control. The UI layer only lays the
//! fragments out.

use crate::species::{format_population, SpeciesRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLine {
    pub display_name: String,
    /// Render the "(You)" marker
    pub is_viewer: bool,
}

/// The visible parts of one species record for one viewer.
///
/// Every optional fragment is `None` when the record lacks that field, so the
/// dialog never draws an empty label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesDetailView {
    pub title: String,
    pub common_name: Option<String>,
    pub image: Option<ImageView>,
    /// Already formatted, e.g. "Total Population: 6,517"
    pub population: Option<String>,
    /// Already formatted, e.g. "Kingdom: Animalia"
    pub kingdom: Option<String>,
    pub author: Option<AuthorLine>,
    pub description: Option<String>,
    /// The edit control exists only when this is set
    pub can_edit: bool,
}

impl SpeciesDetailView {
    pub fn render(record: &SpeciesRecord, viewer_id: &str) -> Self {
        let is_viewer = record.is_authored_by(viewer_id);
        Self {
            title: record.scientific_name.clone(),
            common_name: record.common_name().map(str::to_string),
            image: record.image().map(|src| ImageView {
                src: src.to_string(),
                alt: record.scientific_name.clone(),
            }),
            population: record
                .total_population()
                .map(|n| format!("Total Population: {}", format_population(n))),
            kingdom: record.kingdom().map(|k| format!("Kingdom: {}", k)),
            author: record.author_display_name().map(|name| AuthorLine {
                display_name: name.to_string(),
                is_viewer,
            }),
            description: record.description().map(str::to_string),
            can_edit: is_viewer,
        }
    }

    /// Plain-text rendering, one line per visible fragment.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.title.clone()];
        if let Some(common_name) = &self.common_name {
            lines.push(common_name.clone());
        }
        if let Some(image) = &self.image {
            lines.push(format!("Image: {}", image.src));
        }
        if let Some(population) = &self.population {
            lines.push(population.clone());
        }
        if let Some(kingdom) = &self.kingdom {
            lines.push(kingdom.clone());
        }
        if let Some(author) = &self.author {
            if author.is_viewer {
                lines.push(format!("Author: {} (You)", author.display_name));
            } else {
                lines.push(format!("Author: {}", author.display_name));
            }
        }
        if let Some(description) = &self.description {
            lines.push(description.clone());
        }
        lines
    }
}

/// Hand-off to the edit flow, emitted when the author presses the edit control.
#[derive(Debug, Clone, PartialEq)]
pub struct EditRequest {
    pub viewer_id: String,
    pub record: SpeciesRecord,
}

impl EditRequest {
    /// `None` unless the viewer may edit the record.
    pub fn new(record: &SpeciesRecord, viewer_id: &str) -> Option<Self> {
        record.is_authored_by(viewer_id).then(|| Self {
            viewer_id: viewer_id.to_string(),
            record: record.clone(),
        })
    }
}
