/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Input data records.
//!
//! A [`Record`] is a flat map from field key to [`FieldValue`]. In JSON or
//! YAML it is written as a plain object:
//!
//! ```yaml
//! title: The Structure of Scientific Revolutions
//! volume: 2
//! datePublished: { year: 1962, month: 1 }
//! author:
//!   - { first: Thomas, last: Kuhn }
//! selectors:
//!   genre: monograph
//! ```
//!
//! The `selectors` key is reserved: it carries secondary selector values for
//! enum traits, keyed by field.
//!
//! A value of any other shape (a boolean, a nested object) is kept as
//! [`FieldValue::Other`]: present, but not renderable by any trait kind.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A data record rendered against a style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Selector values used by enum traits whose entries declare selectors.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub selectors: IndexMap<String, String>,
    /// Field values keyed by field name, in input order.
    #[serde(flatten)]
    pub fields: IndexMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field value, returning the record.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a selector value, returning the record.
    pub fn with_selector(mut self, key: impl Into<String>, selector: impl Into<String>) -> Self {
        self.selectors.insert(key.into(), selector.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// The value of a field, or `None` when it is absent or explicitly null.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key).filter(|v| !v.is_null())
    }

    /// Whether a field is present. Presence does not depend on truthiness:
    /// an empty string or a zero is present.
    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn selector(&self, key: &str) -> Option<&str> {
        self.selectors.get(key).map(String::as_str)
    }
}

/// The value of a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An explicit `null`; treated as absent.
    Null,
    Text(String),
    Number(f64),
    Contributors(Vec<Contributor>),
    /// A date object. Only the map form `{year, month, day}` is accepted.
    #[serde(deserialize_with = "date_parts")]
    Date(DateValue),
    /// Any other value, kept as given.
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Plain string form for scalar values.
    ///
    /// Numbers use the shortest decimal form, so `5.0` becomes `"5"`.
    /// Dates and contributor lists have no plain form.
    pub fn as_plain(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Null
            | FieldValue::Contributors(_)
            | FieldValue::Date(_)
            | FieldValue::Other(_) => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateValue> {
        match self {
            FieldValue::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_contributors(&self) -> Option<&[Contributor]> {
        match self {
            FieldValue::Contributors(list) => Some(list),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<DateValue> for FieldValue {
    fn from(d: DateValue) -> Self {
        FieldValue::Date(d)
    }
}

impl From<Vec<Contributor>> for FieldValue {
    fn from(list: Vec<Contributor>) -> Self {
        FieldValue::Contributors(list)
    }
}

/// A partial calendar date. Any subset of parts may be present.
///
/// Parts are kept as the strings they were given in; integers in the input
/// are accepted and converted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateValue {
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub month: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub day: Option<String>,
}

impl DateValue {
    pub fn year(year: impl Into<String>) -> Self {
        Self {
            year: Some(year.into()),
            ..Default::default()
        }
    }

    pub fn year_month(year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            year: Some(year.into()),
            month: Some(month.into()),
            day: None,
        }
    }

    pub fn ymd(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: Some(year.into()),
            month: Some(month.into()),
            day: Some(day.into()),
        }
    }

    /// True when no part is present.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }
}

/// A person credited on a work. Keys other than `first` and `last` are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first: String,
    pub last: String,
}

impl Contributor {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }
}

impl fmt::Display for Contributor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first.is_empty() {
            write!(f, "{}", self.last)
        } else {
            write!(f, "{}, {}", self.last, self.first)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(i64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value.map(StringOrNumber::into_string))
}

const DATE_PARTS: &[&str] = &["year", "month", "day"];

// Reads a date from a map only; a derived struct impl would also take a
// positional sequence such as `["a", "b"]`.
fn date_parts<'de, D>(deserializer: D) -> Result<DateValue, D::Error>
where
    D: Deserializer<'de>,
{
    let parts = IndexMap::<String, Option<StringOrNumber>>::deserialize(deserializer)?;
    let mut date = DateValue::default();
    for (part, value) in parts {
        let value = value.map(StringOrNumber::into_string);
        match part.as_str() {
            "year" => date.year = value,
            "month" => date.month = value,
            "day" => date.day = value,
            other => return Err(D::Error::unknown_field(other, DATE_PARTS)),
        }
    }
    Ok(date)
}
