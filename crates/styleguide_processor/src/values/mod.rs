/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Value extraction for traits.
//!
//! Each trait kind resolves its field from the record into a display string,
//! or into nothing when the data is absent or cannot satisfy the kind's
//! configuration. Stubs are applied here, so a stubbed trait with no data
//! still produces a value.

pub mod contributor;
pub mod date;
pub mod enumeration;
pub mod text;

use styleguide_core::{Record, TraitKind, TraitSpec};

/// A resolved trait, ready for markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcValues {
    pub prefix: String,
    pub value: String,
    pub suffix: String,
}

/// Outcome of resolving a field against one kind's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    /// The field rendered to this value.
    Value(String),
    /// The field has no data; a stub may stand in.
    Absent,
    /// The field has data that the configuration cannot render, for example
    /// a date pattern asking for a month the date does not have.
    Unresolved,
}

/// Extract a display string for `key` from a record.
pub trait FieldValues {
    fn values(&self, key: &str, record: &Record) -> Resolved;
}

/// Resolve a trait against a record.
///
/// Returns `None` when the trait contributes nothing: no data and no stub,
/// or data the trait's configuration cannot render.
pub fn resolve(spec: &TraitSpec, record: &Record) -> Option<ProcValues> {
    let resolved = match &spec.kind {
        TraitKind::Text | TraitKind::Number => text::PlainValue.values(&spec.key, record),
        TraitKind::Date(config) => config.values(&spec.key, record),
        TraitKind::Contributors(config) => config.values(&spec.key, record),
        TraitKind::Enum(mapping) => mapping.values(&spec.key, record),
    };
    let value = match resolved {
        Resolved::Value(value) => value,
        Resolved::Absent => spec.stub.clone()?,
        Resolved::Unresolved => return None,
    };
    Some(ProcValues {
        prefix: spec.prefix.clone(),
        value,
        suffix: spec.suffix.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleguide_core::{DateConfig, DateValue, Markup, Visibility};

    fn date_trait(pattern: &str, stub: Option<&str>) -> TraitSpec {
        TraitSpec {
            key: "datePublished".to_string(),
            prefix: "(".to_string(),
            suffix: ")".to_string(),
            kind: TraitKind::Date(DateConfig {
                pattern: pattern.to_string(),
            }),
            visibility: Visibility::Default,
            stub: stub.map(str::to_string),
            markup: Markup::default(),
            order: 0,
        }
    }

    #[test]
    fn test_resolve_keeps_affixes() {
        let record = Record::new().with("datePublished", DateValue::year("2012"));
        let values = resolve(&date_trait("YYYY", None), &record).unwrap();
        assert_eq!(values.prefix, "(");
        assert_eq!(values.value, "2012");
        assert_eq!(values.suffix, ")");
    }

    #[test]
    fn test_stub_replaces_absent_data() {
        let values = resolve(&date_trait("YYYY", Some("n.d.")), &Record::new()).unwrap();
        assert_eq!(values.value, "n.d.");
    }

    #[test]
    fn test_missing_without_stub_contributes_nothing() {
        assert_eq!(resolve(&date_trait("YYYY", None), &Record::new()), None);
    }

    #[test]
    fn test_unresolvable_data_ignores_stub() {
        let record = Record::new().with("datePublished", DateValue::year("2012"));
        assert_eq!(resolve(&date_trait("MMMM", Some("n.d.")), &record), None);
    }
}
