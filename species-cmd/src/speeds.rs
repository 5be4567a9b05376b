//! `speeds` subcommand: the speed chart dataset as a table or JSON payload.

use crate::source::read_source;
use species_core::{load_records, ChartDataset, ChartPayload, DisplayMode};

pub async fn run_speeds(source: &str, mode: DisplayMode, json: bool) -> anyhow::Result<()> {
    let csv_data = read_source(source).await?;
    let records = load_records(&csv_data);
    log::info!("{} usable animals in {}", records.len(), source);

    if json {
        let payload = ChartPayload::build(&records, mode);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", format_table(&ChartDataset::select(&records, mode)));
    }
    Ok(())
}

/// Plain-text table of a dataset. Empty datasets print a single notice line.
pub fn format_table(dataset: &ChartDataset) -> String {
    let mut out = String::new();
    match dataset {
        ChartDataset::Grouped(aggregates) => {
            if aggregates.is_empty() {
                return "No usable animal rows.\n".to_string();
            }
            out.push_str(&format!("{:<12} {:>14} {:>6}\n", "Diet", "Avg km/h", "n"));
            for a in aggregates {
                out.push_str(&format!(
                    "{:<12} {:>14.1} {:>6}\n",
                    a.diet.display_name(),
                    a.average_speed,
                    a.count
                ));
            }
        }
        ChartDataset::Individual(records) => {
            if records.is_empty() {
                return "No usable animal rows.\n".to_string();
            }
            let width = records
                .iter()
                .map(|r| r.name.chars().count())
                .max()
                .unwrap_or(0)
                .max("Animal".len());
            out.push_str(&format!("{:<width$} {:<10} {:>8}\n", "Animal", "Diet", "km/h"));
            for r in records {
                out.push_str(&format!(
                    "{:<width$} {:<10} {:>8.2}\n",
                    r.name,
                    r.diet.display_name(),
                    r.speed_kmh
                ));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use species_core::animal::SAMPLE_ANIMALS_CSV;

    fn sample() -> Vec<species_core::AnimalRecord> {
        load_records("Animal,Diet,Average Speed (km/h)\nCheetah,Carnivore,120\nElephant,Herbivore,25\nBad,X,0\n")
    }

    #[test]
    fn grouped_table_lists_each_diet() {
        let table = format_table(&ChartDataset::select(&sample(), DisplayMode::Grouped));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Carnivore"));
        assert!(lines[1].contains("120.0"));
        assert!(lines[1].trim_end().ends_with('1'));
        assert!(lines[2].starts_with("Herbivore"));
    }

    #[test]
    fn individual_table_keeps_input_order() {
        let table = format_table(&ChartDataset::select(&sample(), DisplayMode::Individual));
        let names: Vec<&str> = table
            .lines()
            .skip(1)
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(names, vec!["Cheetah", "Elephant"]);
    }

    #[test]
    fn empty_dataset_prints_notice() {
        for mode in DisplayMode::ALL {
            assert_eq!(
                format_table(&ChartDataset::select(&[], mode)),
                "No usable animal rows.\n"
            );
        }
    }

    #[test]
    fn fixture_table_has_a_row_per_animal() {
        let records = load_records(SAMPLE_ANIMALS_CSV);
        let table = format_table(&ChartDataset::select(&records, DisplayMode::Individual));
        assert_eq!(table.lines().count(), records.len() + 1);
    }

    #[tokio::test]
    async fn runs_against_the_fixture() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/sample_animals.csv");
        run_speeds(path, DisplayMode::Grouped, false).await.unwrap();
        run_speeds(path, DisplayMode::Individual, true).await.unwrap();
    }
}
