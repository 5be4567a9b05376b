//! Animal speed records parsed from the sample animals CSV.
//!
//! The CSV is header-driven and only three columns matter:
//! `Animal`, `Diet` and `Average Speed (km/h)`. Column order does not matter
//! and extra columns are ignored.
//!
//! Parsing never fails. Rows that cannot be turned into a usable
//! [`AnimalRecord`] are dropped, because partial or garbled source data should
//! still produce a chart from whatever rows are good.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Embedded copy of the sample animals dataset served to the speed chart.
pub static SAMPLE_ANIMALS_CSV: &str = include_str!("../../fixtures/sample_animals.csv");

/// Header of the animal name column.
pub const ANIMAL_COLUMN: &str = "Animal";

/// Header of the diet column.
pub const DIET_COLUMN: &str = "Diet";

/// Header of the speed column, in kilometres per hour.
pub const SPEED_COLUMN: &str = "Average Speed (km/h)";

/// Feeding behavior of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Diet {
    Carnivore,
    Herbivore,
    Omnivore,
}

impl Diet {
    /// All diets in legend order.
    pub const ALL: [Diet; 3] = [Diet::Carnivore, Diet::Herbivore, Diet::Omnivore];

    /// Classify a raw diet cell. Empty or unrecognized text is omnivore.
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "carnivore" => Diet::Carnivore,
            "herbivore" => Diet::Herbivore,
            _ => Diet::Omnivore,
        }
    }

    /// Lowercase key used as the grouped chart's x-axis domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Carnivore => "carnivore",
            Diet::Herbivore => "herbivore",
            Diet::Omnivore => "omnivore",
        }
    }

    /// Capitalized name for axis ticks and legend rows.
    pub fn display_name(&self) -> &'static str {
        match self {
            Diet::Carnivore => "Carnivore",
            Diet::Herbivore => "Herbivore",
            Diet::Omnivore => "Omnivore",
        }
    }

    /// Fixed bar color (red, green, blue).
    pub fn color(&self) -> &'static str {
        match self {
            Diet::Carnivore => "#ef4444",
            Diet::Herbivore => "#22c55e",
            Diet::Omnivore => "#3b82f6",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One usable row of the animals dataset.
///
/// Invariant: `name` is non-empty and `speed_kmh` is finite and > 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub name: String,
    pub diet: Diet,
    /// Average speed in km/h
    pub speed_kmh: f64,
}

impl AnimalRecord {
    /// Build a record from raw cells, or `None` when the row is unusable.
    pub fn from_cells(name: &str, diet: &str, speed: &str) -> Option<Self> {
        let name = name.trim();
        let speed_kmh = parse_leading_f64(speed).unwrap_or(0.0);
        if name.is_empty() || !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            diet: Diet::from_label(diet),
            speed_kmh,
        })
    }
}

/// Leading decimal number of a cell, ignoring whatever follows it.
///
/// `"120 km/h"` reads as 120 and `"88abc"` as 88. Returns `None` when the
/// cell does not start with a number.
pub fn parse_leading_f64(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = if matches!(bytes.first(), Some(b'+' | b'-')) { 1 } else { 0 };
    let int_end = digits_from(end);
    let mut digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        digits += frac_end - (end + 1);
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Column positions resolved from the CSV header row.
struct Columns {
    animal: Option<usize>,
    diet: Option<usize>,
    speed: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        };
        Self {
            animal: find(ANIMAL_COLUMN),
            diet: find(DIET_COLUMN),
            speed: find(SPEED_COLUMN),
        }
    }
}

/// Parse the animals CSV into usable records, preserving input order.
///
/// A missing `Diet` cell defaults to omnivore. Speeds are read from the
/// leading number of the cell; a missing or non-numeric speed counts as zero
/// and drops the row, as does an empty name. CSV-level errors on a row drop
/// that row only.
pub fn load_records(csv_data: &str) -> Vec<AnimalRecord> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let columns = match rdr.headers() {
        Ok(headers) => Columns::resolve(headers),
        Err(e) => {
            log::warn!("[Species Debug] loader: unreadable CSV header: {}", e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                log::debug!("[Species Debug] loader: skipping malformed row: {}", e);
                skipped += 1;
                continue;
            }
        };
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("");

        match AnimalRecord::from_cells(cell(columns.animal), cell(columns.diet), cell(columns.speed)) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    log::info!(
        "[Species Debug] loader: Loaded {} animals, skipped {} unusable rows",
        records.len(),
        skipped
    );
    records
}
