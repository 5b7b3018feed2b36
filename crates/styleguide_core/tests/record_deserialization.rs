/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use styleguide_core::{Contributor, DateValue, FieldKind, FieldValue, Record, Schema};

#[test]
fn test_json_record() {
    let json = r#"{
        "title": "The Structure of Scientific Revolutions",
        "volume": 2,
        "datePublished": {"year": 1962, "month": "1"},
        "author": [{"first": "Thomas", "last": "Kuhn"}],
        "publisher": null
    }"#;
    let record: Record = serde_json::from_str(json).unwrap();

    assert_eq!(
        record.get("title"),
        Some(&FieldValue::Text(
            "The Structure of Scientific Revolutions".to_string()
        ))
    );
    assert_eq!(record.get("volume"), Some(&FieldValue::Number(2.0)));
    assert_eq!(
        record.get("datePublished"),
        Some(&FieldValue::Date(DateValue::year_month("1962", "1")))
    );
    assert_eq!(
        record.get("author"),
        Some(&FieldValue::Contributors(vec![Contributor::new(
            "Thomas", "Kuhn"
        )]))
    );
    assert!(!record.is_present("publisher"));
}

#[test]
fn test_yaml_record() {
    let yaml = r#"
title: first
datePublished: {}
editor:
  - last: Plato
selectors:
  title: a
"#;
    let record: Record = serde_yaml::from_str(yaml).unwrap();

    assert!(record.is_present("datePublished"));
    assert!(record
        .get("datePublished")
        .and_then(FieldValue::as_date)
        .is_some_and(DateValue::is_empty));
    assert_eq!(
        record.get("editor").and_then(FieldValue::as_contributors),
        Some(&[Contributor::new("", "Plato")][..])
    );
    assert_eq!(record.selector("title"), Some("a"));
}

#[test]
fn test_record_builder_round_trip() {
    let record = Record::new()
        .with("title", "foo")
        .with("volume", 5)
        .with_selector("title", "b");
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"selectors": {"title": "b"}, "title": "foo", "volume": 5.0})
    );
}

#[test]
fn test_schema_from_yaml() {
    let schema: Schema = serde_yaml::from_str("isbn: text\nseries: number\n").unwrap();
    assert_eq!(schema.kind_of("series"), Some(FieldKind::Number));
    assert!(!schema.contains("title"));

    let mut full = Schema::bibliographic();
    full.extend(&schema);
    assert_eq!(full.kind_of("series"), Some(FieldKind::Number));
    assert_eq!(full.kind_of("title"), Some(FieldKind::Text));
}
