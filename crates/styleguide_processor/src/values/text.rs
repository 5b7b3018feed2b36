/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::values::{FieldValues, Resolved};
use styleguide_core::Record;

/// Text and number fields, rendered verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainValue;

impl FieldValues for PlainValue {
    fn values(&self, key: &str, record: &Record) -> Resolved {
        match record.get(key) {
            None => Resolved::Absent,
            Some(value) => value
                .as_plain()
                .map_or(Resolved::Unresolved, Resolved::Value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleguide_core::Contributor;

    #[test]
    fn test_text_and_numbers() {
        let record = Record::new()
            .with("title", "hello there")
            .with("volume", 5)
            .with("issue", 2.5);
        assert_eq!(
            PlainValue.values("title", &record),
            Resolved::Value("hello there".to_string())
        );
        assert_eq!(
            PlainValue.values("volume", &record),
            Resolved::Value("5".to_string())
        );
        assert_eq!(
            PlainValue.values("issue", &record),
            Resolved::Value("2.5".to_string())
        );
    }

    #[test]
    fn test_empty_string_is_present() {
        let record = Record::new().with("title", "");
        assert_eq!(
            PlainValue.values("title", &record),
            Resolved::Value(String::new())
        );
        assert_eq!(PlainValue.values("publisher", &record), Resolved::Absent);
    }

    #[test]
    fn test_structured_value_in_text_trait() {
        let record = Record::new().with("title", vec![Contributor::new("Foo", "Bar")]);
        assert_eq!(PlainValue.values("title", &record), Resolved::Unresolved);
    }
}
