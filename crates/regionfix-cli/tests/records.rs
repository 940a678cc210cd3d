//! JSON record handling for the `correct` command.

use std::io::Write;
use std::path::PathBuf;

use regionfix_cli::records::{load_records, read_records, write_records};
use regionfix_core::correct_batch;
use regionfix_model::{AddressInput, ResolverOptions};
use regionfix_reference::{DatasetLayout, ReferenceIndex, dataset_path};

fn sample_index() -> ReferenceIndex {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    ReferenceIndex::load(&dataset_path(&data_dir), &DatasetLayout::default())
        .expect("load sample dataset")
}

const INPUT: &str = r#"[
    {"province": "ADANA", "district": "CEYHAN"},
    {"fullAddress": "Kizilay Mah. 5", "province": "Anakra", "district": "Cankaya", "postalCode": "06420"},
    {"province": "XxxYyyZzz", "district": "AaaBbbCcc"}
]"#;

#[test]
fn missing_fields_default_to_empty() {
    let records = read_records(r#"[{"district": "Seyhan"}, {}]"#.as_bytes()).expect("parse");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], AddressInput::new("", "Seyhan"));
    assert_eq!(records[1], AddressInput::default());
}

#[test]
fn non_array_input_is_rejected() {
    let err = read_records(r#"{"province": "ADANA"}"#.as_bytes()).unwrap_err();
    assert!(format!("{err:#}").contains("parse address records"));
}

#[test]
fn records_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(INPUT.as_bytes()).expect("write input");
    let records = load_records(Some(file.path())).expect("load");
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].postal_code, "06420");
}

#[test]
fn missing_input_file_names_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");
    let err = load_records(Some(&path)).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("open input"));
    assert!(message.contains("absent.json"));
}

#[test]
fn corrected_batch_serializes_in_wire_format() {
    let index = sample_index();
    let records = read_records(INPUT.as_bytes()).expect("parse");
    let results = correct_batch(&index, &records, &ResolverOptions::default());

    let mut out = Vec::new();
    write_records(&mut out, &results).expect("write");
    assert!(out.ends_with(b"\n"));
    let parsed: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
    assert_eq!(parsed.as_array().map(Vec::len), Some(3));

    insta::assert_json_snapshot!(results, @r#"
    [
      {
        "fullAddress": "",
        "province": "ADANA",
        "district": "CEYHAN",
        "postalCode": "",
        "corrected": false,
        "confidence": "exact"
      },
      {
        "fullAddress": "Kizilay Mah. 5",
        "province": "ANKARA",
        "district": "CANKAYA",
        "postalCode": "06420",
        "corrected": true,
        "confidence": "fuzzy"
      },
      {
        "fullAddress": "",
        "province": "XxxYyyZzz",
        "district": "AaaBbbCcc",
        "postalCode": "",
        "corrected": false,
        "confidence": "unknown"
      }
    ]
    "#);
}
