//! `species` subcommand: the detail dialog contents as plain text.

use crate::source::read_source;
use species_core::{parse_species_json, SpeciesDetailView, SpeciesRecord};

pub async fn run_species(source: &str, viewer: &str, name: Option<&str>) -> anyhow::Result<()> {
    let json = read_source(source).await?;
    let records = parse_species_json(&json)?;
    let selected = select_records(&records, name);
    if let Some(name) = name {
        if selected.is_empty() {
            anyhow::bail!("no species named '{}' in {}", name, source);
        }
    }

    let blocks: Vec<String> = selected
        .iter()
        .map(|record| format_detail(record, viewer))
        .collect();
    print!("{}", blocks.join("\n"));
    Ok(())
}

/// Records matching `name` (case-insensitive), or all of them.
pub fn select_records<'a>(records: &'a [SpeciesRecord], name: Option<&str>) -> Vec<&'a SpeciesRecord> {
    match name {
        Some(name) => records
            .iter()
            .filter(|r| r.scientific_name.eq_ignore_ascii_case(name.trim()))
            .collect(),
        None => records.iter().collect(),
    }
}

/// One record's detail view followed by whether the edit control shows.
pub fn format_detail(record: &SpeciesRecord, viewer: &str) -> String {
    let view = SpeciesDetailView::render(record, viewer);
    let mut out = String::new();
    for line in view.lines() {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(if view.can_edit {
        "[Edit Species]\n"
    } else {
        "(read-only)\n"
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use species_core::species::SAMPLE_SPECIES_JSON;

    fn gallery() -> Vec<SpeciesRecord> {
        parse_species_json(SAMPLE_SPECIES_JSON).unwrap()
    }

    #[test]
    fn selects_by_scientific_name() {
        let records = gallery();
        let found = select_records(&records, Some("loxodonta AFRICANA"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].common_name(), Some("African Bush Elephant"));
        assert_eq!(select_records(&records, None).len(), records.len());
        assert!(select_records(&records, Some("Felis catus")).is_empty());
    }

    #[test]
    fn author_gets_edit_marker() {
        let records = gallery();
        let author = records[0].author.clone();
        let detail = format_detail(&records[0], &author);
        assert!(detail.contains("Author: Ada Okafor (You)"));
        assert!(detail.ends_with("[Edit Species]\n"));
        assert!(detail.contains("Total Population: 6,517"));
    }

    #[test]
    fn other_viewer_is_read_only() {
        let records = gallery();
        let detail = format_detail(&records[0], "someone-else");
        assert!(detail.contains("Author: Ada Okafor\n"));
        assert!(detail.ends_with("(read-only)\n"));
    }

    #[test]
    fn bare_record_prints_only_its_name() {
        let records = gallery();
        assert_eq!(format_detail(&records[3], ""), "Amanita muscaria\n(read-only)\n");
    }

    #[tokio::test]
    async fn unknown_name_is_an_error() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures/species.json");
        assert!(run_species(path, "", Some("Felis catus")).await.is_err());
        run_species(path, "", None).await.unwrap();
    }
}
