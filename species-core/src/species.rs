//! Species rows as returned by the backend, joined with the author profile.
//!
//! Field names follow the backend's snake_case row layout so rows deserialize
//! straight from its JSON.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Embedded species gallery shown by the species details app.
pub static SAMPLE_SPECIES_JSON: &str = include_str!("../../fixtures/species.json");

/// Public profile of a record's author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub display_name: String,
}

/// A snapshot of one species row. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub scientific_name: String,
    #[serde(default)]
    pub common_name: Option<String>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub total_population: Option<i64>,
    #[serde(default)]
    pub kingdom: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// User id of the author
    pub author: String,
    #[serde(default)]
    pub profiles: Option<AuthorProfile>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl SpeciesRecord {
    /// A record with only the required fields set.
    pub fn new(scientific_name: &str, author: &str) -> Self {
        Self {
            id: None,
            scientific_name: scientific_name.to_string(),
            common_name: None,
            image: None,
            total_population: None,
            kingdom: None,
            description: None,
            author: author.to_string(),
            profiles: None,
        }
    }

    pub fn common_name(&self) -> Option<&str> {
        non_empty(&self.common_name)
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image)
    }

    /// Population, treating zero as unknown.
    pub fn total_population(&self) -> Option<i64> {
        self.total_population.filter(|n| *n != 0)
    }

    pub fn kingdom(&self) -> Option<&str> {
        non_empty(&self.kingdom)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn author_display_name(&self) -> Option<&str> {
        self.profiles
            .as_ref()
            .map(|p| p.display_name.trim())
            .filter(|s| !s.is_empty())
    }

    /// Stable key for list rendering: the row id, or the list position when
    /// the row has none. Scientific names may repeat, so they are not used.
    pub fn list_key(&self, position: usize) -> String {
        match self.id {
            Some(id) => format!("id-{}", id),
            None => format!("row-{}", position),
        }
    }

    /// Whether `viewer_id` wrote this record. An empty viewer never matches.
    pub fn is_authored_by(&self, viewer_id: &str) -> bool {
        !viewer_id.is_empty() && self.author == viewer_id
    }
}

/// Parse a JSON array of species rows.
pub fn parse_species_json(json: &str) -> anyhow::Result<Vec<SpeciesRecord>> {
    let records: Vec<SpeciesRecord> =
        serde_json::from_str(json).context("species JSON is not an array of species rows")?;
    log::info!("[Species Debug] species: Loaded {} species records", records.len());
    Ok(records)
}

/// Format a count with comma thousands separators, e.g. `1234567` -> `1,234,567`.
pub fn format_population(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
