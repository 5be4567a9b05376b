//! Per-diet averages for the grouped speed chart.

use crate::animal::{AnimalRecord, Diet};
use serde::Serialize;

/// Average speed over all records sharing a diet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietAggregate {
    pub diet: Diet,
    /// Mean of `speed_kmh` over the contributing records
    pub average_speed: f64,
    /// Number of contributing records, always at least 1
    pub count: usize,
}

/// Group records by diet and average their speeds.
///
/// Only diets present in `records` produce an aggregate. Output follows the
/// order in which each diet first appears, so repeated calls on the same
/// input give the same sequence.
pub fn compute_diet_averages(records: &[AnimalRecord]) -> Vec<DietAggregate> {
    let mut groups: Vec<(Diet, f64, usize)> = Vec::with_capacity(Diet::ALL.len());
    for record in records {
        match groups.iter_mut().find(|(diet, _, _)| *diet == record.diet) {
            Some((_, total, count)) => {
                *total += record.speed_kmh;
                *count += 1;
            }
            None => groups.push((record.diet, record.speed_kmh, 1)),
        }
    }

    groups
        .into_iter()
        .map(|(diet, total, count)| DietAggregate {
            diet,
            average_speed: total / count as f64,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::{load_records, SAMPLE_ANIMALS_CSV};

    fn animal(name: &str, diet: Diet, speed_kmh: f64) -> AnimalRecord {
        AnimalRecord {
            name: name.to_string(),
            diet,
            speed_kmh,
        }
    }

    #[test]
    fn one_animal_per_diet_averages_to_itself() {
        let records = vec![
            animal("Cheetah", Diet::Carnivore, 120.0),
            animal("Elephant", Diet::Herbivore, 25.0),
        ];
        assert_eq!(
            compute_diet_averages(&records),
            vec![
                DietAggregate {
                    diet: Diet::Carnivore,
                    average_speed: 120.0,
                    count: 1
                },
                DietAggregate {
                    diet: Diet::Herbivore,
                    average_speed: 25.0,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn averages_within_each_group() {
        let records = vec![
            animal("Lion", Diet::Carnivore, 80.0),
            animal("Human", Diet::Omnivore, 45.0),
            animal("Cheetah", Diet::Carnivore, 120.0),
            animal("Hyena", Diet::Carnivore, 60.0),
            animal("Bear", Diet::Omnivore, 56.0),
        ];
        let aggregates = compute_diet_averages(&records);

        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].diet, Diet::Carnivore);
        assert_eq!(aggregates[0].count, 3);
        assert!((aggregates[0].average_speed - 260.0 / 3.0).abs() < 1e-9);
        assert_eq!(aggregates[1].diet, Diet::Omnivore);
        assert_eq!(aggregates[1].count, 2);
        assert!((aggregates[1].average_speed - 50.5).abs() < 1e-9);
    }

    #[test]
    fn only_present_diets_are_grouped() {
        let records = vec![animal("Zebra", Diet::Herbivore, 64.0)];
        let aggregates = compute_diet_averages(&records);
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].diet, Diet::Herbivore);
    }

    #[test]
    fn empty_input_has_no_aggregates() {
        assert!(compute_diet_averages(&[]).is_empty());
    }

    #[test]
    fn counts_sum_to_record_total() {
        let records = load_records(SAMPLE_ANIMALS_CSV);
        let aggregates = compute_diet_averages(&records);

        let total: usize = aggregates.iter().map(|a| a.count).sum();
        assert_eq!(total, records.len());

        for aggregate in &aggregates {
            assert!(aggregate.count >= 1);
            let group: Vec<f64> = records
                .iter()
                .filter(|r| r.diet == aggregate.diet)
                .map(|r| r.speed_kmh)
                .collect();
            assert_eq!(group.len(), aggregate.count);
            let expected = group.iter().sum::<f64>() / group.len() as f64;
            assert!((aggregate.average_speed - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn sample_fixture_groups_in_first_appearance_order() {
        let aggregates = compute_diet_averages(&load_records(SAMPLE_ANIMALS_CSV));
        let diets: Vec<Diet> = aggregates.iter().map(|a| a.diet).collect();
        assert_eq!(diets, vec![Diet::Carnivore, Diet::Herbivore, Diet::Omnivore]);
        let counts: Vec<usize> = aggregates.iter().map(|a| a.count).collect();
        assert_eq!(counts, vec![8, 14, 7]);
        assert!((aggregates[0].average_speed - 67.625).abs() < 1e-9);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let records = load_records(SAMPLE_ANIMALS_CSV);
        assert_eq!(compute_diet_averages(&records), compute_diet_averages(&records));
    }
}
