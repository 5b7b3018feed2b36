/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::values::{FieldValues, Resolved};
use styleguide_core::{EnumEntry, EnumMapping, Record};

/// Pick the entry matching the record's value for `key`.
///
/// When any entry declares a selector, matching is against the record's
/// selector for `key`, or the raw field value if the record has none, and
/// entries match on their selector. Otherwise entries match on their value.
pub fn select<'m>(mapping: &'m EnumMapping, key: &str, record: &Record) -> Option<&'m EnumEntry> {
    let raw = record.get(key).and_then(|value| value.as_plain());
    if mapping.uses_selectors() {
        let needle = record.selector(key).map(str::to_string).or(raw)?;
        mapping
            .entries()
            .iter()
            .find(|entry| entry.selector.as_deref().unwrap_or(&entry.value) == needle)
    } else {
        let needle = raw?;
        mapping.entries().iter().find(|entry| entry.value == needle)
    }
}

impl FieldValues for EnumMapping {
    fn values(&self, key: &str, record: &Record) -> Resolved {
        match select(self, key, record) {
            Some(entry) => Resolved::Value(entry.display.clone()),
            None => Resolved::Absent,
        }
    }
}
