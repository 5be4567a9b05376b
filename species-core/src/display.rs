//! Display mode selection and the JSON payloads handed to the D3 bar chart.
//!
//! The chart is always redrawn from scratch: [`ChartDataset::select`] is a pure
//! function of the current records and mode, and nothing from a previous mode
//! is carried over.

use crate::aggregate::{compute_diet_averages, DietAggregate};
use crate::animal::{AnimalRecord, Diet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Y-axis label shared by both chart layouts.
pub const SPEED_AXIS_LABEL: &str = "Average Speed (km/h)";

/// Whether the chart shows per-diet averages or one bar per animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Grouped,
    #[default]
    Individual,
}

impl DisplayMode {
    /// Modes in toggle-button order.
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Grouped, DisplayMode::Individual];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Grouped => "grouped",
            DisplayMode::Individual => "individual",
        }
    }

    /// Toggle button caption.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Grouped => "By Diet Type",
            DisplayMode::Individual => "By Animal",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Grouped => DisplayMode::Individual,
            DisplayMode::Individual => DisplayMode::Grouped,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grouped" | "diet" => Ok(DisplayMode::Grouped),
            "individual" | "animal" => Ok(DisplayMode::Individual),
            other => anyhow::bail!("unknown display mode '{}' (expected grouped or individual)", other),
        }
    }
}

/// The dataset a chart pass draws, shaped by the display mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "data", rename_all = "lowercase")]
pub enum ChartDataset {
    Grouped(Vec<DietAggregate>),
    Individual(Vec<AnimalRecord>),
}

impl ChartDataset {
    /// Derive the dataset for `mode` from the full record list.
    pub fn select(records: &[AnimalRecord], mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Grouped => ChartDataset::Grouped(compute_diet_averages(records)),
            DisplayMode::Individual => ChartDataset::Individual(records.to_vec()),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        match self {
            ChartDataset::Grouped(_) => DisplayMode::Grouped,
            ChartDataset::Individual(_) => DisplayMode::Individual,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ChartDataset::Grouped(aggregates) => aggregates.len(),
            ChartDataset::Individual(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into one bar per datum.
    pub fn bars(&self) -> Vec<BarDatum> {
        match self {
            ChartDataset::Grouped(aggregates) => aggregates
                .iter()
                .map(|a| BarDatum {
                    key: a.diet.as_str().to_string(),
                    label: a.diet.display_name().to_string(),
                    value: a.average_speed,
                    diet: a.diet,
                    color: a.diet.color(),
                    count: Some(a.count),
                })
                .collect(),
            ChartDataset::Individual(records) => records
                .iter()
                .map(|r| BarDatum {
                    key: r.name.clone(),
                    label: r.name.clone(),
                    value: r.speed_kmh,
                    diet: r.diet,
                    color: r.diet.color(),
                    count: None,
                })
                .collect(),
        }
    }
}

/// A single bar as the D3 renderer consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDatum {
    /// Band-scale domain value
    pub key: String,
    /// X-axis tick text
    pub label: String,
    pub value: f64,
    pub diet: Diet,
    pub color: &'static str,
    /// Sample size annotation, grouped mode only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl BarDatum {
    /// Text drawn above the bar.
    pub fn value_label(&self) -> String {
        format!("{:.1} km/h", self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub diet: Diet,
    pub label: &'static str,
    pub color: &'static str,
}

/// Layout and decoration settings for one chart pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: &'static str,
    pub y_axis_label: &'static str,
    pub mode: DisplayMode,
    pub margin: Margin,
    pub min_width: u32,
    pub min_height: u32,
    /// Band padding between bars
    pub padding: f64,
    /// Rotate x-axis ticks (long animal names)
    pub rotate_ticks: bool,
    pub show_value_labels: bool,
    pub show_counts: bool,
    /// Color key, individual mode only
    pub legend: Vec<LegendEntry>,
}

impl ChartConfig {
    pub fn for_mode(mode: DisplayMode) -> Self {
        let grouped = mode == DisplayMode::Grouped;
        let legend = if grouped {
            Vec::new()
        } else {
            Diet::ALL
                .iter()
                .map(|diet| LegendEntry {
                    diet: *diet,
                    label: diet.display_name(),
                    color: diet.color(),
                })
                .collect()
        };

        Self {
            title: if grouped {
                "Average Speed by Diet Type"
            } else {
                "Animal Speed Comparison"
            },
            y_axis_label: SPEED_AXIS_LABEL,
            mode,
            margin: Margin {
                top: 70,
                right: 60,
                bottom: if grouped { 100 } else { 120 },
                left: 100,
            },
            min_width: 600,
            min_height: 400,
            padding: if grouped { 0.3 } else { 0.2 },
            rotate_ticks: !grouped,
            show_value_labels: grouped,
            show_counts: grouped,
            legend,
        }
    }
}

/// Everything one redraw needs, serialized for the JS side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    pub bars: Vec<BarDatum>,
    pub config: ChartConfig,
}

impl ChartPayload {
    pub fn build(records: &[AnimalRecord], mode: DisplayMode) -> Self {
        let dataset = ChartDataset::select(records, mode);
        Self {
            bars: dataset.bars(),
            config: ChartConfig::for_mode(mode),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn data_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.bars)?)
    }

    pub fn config_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(&self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::{load_records, SAMPLE_ANIMALS_CSV};

    fn sample() -> Vec<AnimalRecord> {
        load_records(
            "Animal,Diet,Average Speed (km/h)\nCheetah,Carnivore,120\nElephant,Herbivore,25\nLion,Carnivore,80\n",
        )
    }

    #[test]
    fn default_mode_is_individual() {
        assert_eq!(DisplayMode::default(), DisplayMode::Individual);
    }

    #[test]
    fn toggle_round_trips() {
        for mode in DisplayMode::ALL {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("grouped".parse::<DisplayMode>().unwrap(), DisplayMode::Grouped);
        assert_eq!(" Individual ".parse::<DisplayMode>().unwrap(), DisplayMode::Individual);
        assert_eq!("diet".parse::<DisplayMode>().unwrap(), DisplayMode::Grouped);
        assert!("stacked".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn grouped_selects_aggregates() {
        let dataset = ChartDataset::select(&sample(), DisplayMode::Grouped);
        match &dataset {
            ChartDataset::Grouped(aggregates) => {
                assert_eq!(aggregates.len(), 2);
                assert_eq!(aggregates[0].diet, Diet::Carnivore);
                assert_eq!(aggregates[0].average_speed, 100.0);
                assert_eq!(aggregates[0].count, 2);
            }
            other => panic!("expected grouped dataset, got {:?}", other),
        }
        assert_eq!(dataset.mode(), DisplayMode::Grouped);
    }

    #[test]
    fn individual_selects_records() {
        let records = sample();
        let dataset = ChartDataset::select(&records, DisplayMode::Individual);
        assert_eq!(dataset, ChartDataset::Individual(records.clone()));
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn switching_back_reproduces_the_dataset() {
        let records = load_records(SAMPLE_ANIMALS_CSV);
        let before = records.clone();

        let first = ChartDataset::select(&records, DisplayMode::Individual);
        let _grouped = ChartDataset::select(&records, DisplayMode::Grouped);
        let again = ChartDataset::select(&records, DisplayMode::Individual);

        assert_eq!(first, again);
        assert_eq!(records, before);
    }

    #[test]
    fn empty_records_give_empty_datasets() {
        for mode in DisplayMode::ALL {
            assert!(ChartDataset::select(&[], mode).is_empty());
            assert!(ChartPayload::build(&[], mode).is_empty());
        }
    }

    #[test]
    fn grouped_bars_carry_counts_and_capitalized_labels() {
        let bars = ChartDataset::select(&sample(), DisplayMode::Grouped).bars();
        assert_eq!(bars[0].key, "carnivore");
        assert_eq!(bars[0].label, "Carnivore");
        assert_eq!(bars[0].count, Some(2));
        assert_eq!(bars[0].color, "#ef4444");
        assert_eq!(bars[0].value_label(), "100.0 km/h");
    }

    #[test]
    fn individual_bars_use_names_and_diet_colors() {
        let bars = ChartDataset::select(&sample(), DisplayMode::Individual).bars();
        let labels: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Cheetah", "Elephant", "Lion"]);
        assert_eq!(bars[1].color, "#22c55e");
        assert!(bars.iter().all(|b| b.count.is_none()));
    }

    #[test]
    fn config_differs_by_mode() {
        let grouped = ChartConfig::for_mode(DisplayMode::Grouped);
        assert_eq!(grouped.title, "Average Speed by Diet Type");
        assert_eq!(grouped.margin.bottom, 100);
        assert!(grouped.show_counts);
        assert!(grouped.legend.is_empty());

        let individual = ChartConfig::for_mode(DisplayMode::Individual);
        assert_eq!(individual.title, "Animal Speed Comparison");
        assert_eq!(individual.margin.bottom, 120);
        assert!(!individual.show_counts);
        assert_eq!(individual.legend.len(), 3);
        assert_eq!(individual.legend[2].color, "#3b82f6");
    }

    #[test]
    fn payload_json_uses_camel_case() {
        let payload = ChartPayload::build(&sample(), DisplayMode::Grouped);
        let data: serde_json::Value = serde_json::from_str(&payload.data_json().unwrap()).unwrap();
        assert_eq!(data[0]["key"], "carnivore");
        assert_eq!(data[0]["count"], 2);
        assert_eq!(data[0]["diet"], "carnivore");

        let config: serde_json::Value =
            serde_json::from_str(&payload.config_json().unwrap()).unwrap();
        assert_eq!(config["mode"], "grouped");
        assert_eq!(config["yAxisLabel"], SPEED_AXIS_LABEL);
        assert_eq!(config["showCounts"], true);
    }

    #[test]
    fn dataset_serializes_with_mode_tag() {
        let json = serde_json::to_value(ChartDataset::select(&sample(), DisplayMode::Grouped)).unwrap();
        assert_eq!(json["mode"], "grouped");
        assert_eq!(json["data"][0]["average_speed"], 100.0);
    }
}
