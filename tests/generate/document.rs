//! Document-level behaviour: layout, round-trip, and write failures.

use super::seeded_generator;
use phones_core::{Catalog, PhoneRecord};
use phones_populate_json::{write_document, DocumentFormat, JsonPopulator, PopulateError};
use tempfile::TempDir;

#[test]
fn test_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("phones.json");
    let phones = seeded_generator(Catalog::default()).generate(100);

    write_document(&phones, &output_path, DocumentFormat::Pretty).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let parsed: Vec<PhoneRecord> = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, phones);
}

#[test]
fn test_compact_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("phones.json");
    let phones = seeded_generator(Catalog::default()).generate(100);

    write_document(&phones, &output_path, DocumentFormat::Compact).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let parsed: Vec<PhoneRecord> = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, phones);
}

#[test]
fn test_empty_document() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("phones.json");

    let mut populator = JsonPopulator::new(seeded_generator(Catalog::default()));
    let metrics = populator.populate(&output_path, 0).unwrap();

    assert_eq!(metrics.rows_written, 0);
    let parsed: Vec<PhoneRecord> =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn test_unicode_written_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("phones.json");

    let mut populator = JsonPopulator::new(seeded_generator(Catalog::default()));
    populator.populate(&output_path, 20).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert!(!content.contains("\\u"));
    // Every record has at least one Arabic "pro"
    let catalog = Catalog::default();
    assert!(catalog.pros.iter().any(|pro| content.contains(pro.as_str())));
}

#[test]
fn test_record_schema_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("phones.json");

    let mut populator = JsonPopulator::new(seeded_generator(Catalog::default()));
    populator.populate(&output_path, 30).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    let expected_specs = [
        "display",
        "processor",
        "ram",
        "storage",
        "camera",
        "battery",
        "os",
        "dimensions",
        "connectivity",
        "security",
        "colors",
    ];
    for phone in json.as_array().unwrap() {
        let specs: Vec<&str> = phone["specs"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(specs, expected_specs);
        let prices: Vec<&str> = phone["prices"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(prices, ["egp", "usd", "sar", "aed"]);
        assert!(phone["ratings"]["userCount"].is_u64());
    }
}

#[test]
fn test_unwritable_destination() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("no-such-dir").join("phones.json");

    let mut populator = JsonPopulator::new(seeded_generator(Catalog::default()));
    let result = populator.populate(&output_path, 5);

    assert!(matches!(result, Err(PopulateError::Io(_))));
}
