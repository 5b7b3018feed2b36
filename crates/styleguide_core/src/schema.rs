/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The field vocabulary a style is compiled against.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a field's data is shaped, and therefore how it is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Contributors,
}

/// Known field keys and their kinds.
///
/// Trait references are parsed against this set: `"(title)"` only yields a
/// trait because `title` is a known key. Deserializes from a plain map:
///
/// ```yaml
/// isbn: text
/// dateIssued: date
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, FieldKind>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::bibliographic()
    }
}

impl Schema {
    /// A schema with no fields.
    pub fn empty() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// The built-in bibliographic vocabulary.
    pub fn bibliographic() -> Self {
        use FieldKind::*;
        [
            ("author", Contributors),
            ("editor", Contributors),
            ("translator", Contributors),
            ("title", Text),
            ("subtitle", Text),
            ("containerTitle", Text),
            ("journal", Text),
            ("publisher", Text),
            ("place", Text),
            ("url", Text),
            ("doi", Text),
            ("isbn", Text),
            ("genre", Text),
            ("volume", Number),
            ("issue", Number),
            ("edition", Number),
            ("pages", Text),
            ("datePublished", Date),
            ("dateAccessed", Date),
            ("dateModified", Date),
        ]
        .into_iter()
        .fold(Self::empty(), |schema, (key, kind)| {
            schema.with_field(key, kind)
        })
    }

    pub fn with_field(mut self, key: impl Into<String>, kind: FieldKind) -> Self {
        self.insert(key, kind);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, kind: FieldKind) {
        self.fields.insert(key.into(), kind);
    }

    pub fn kind_of(&self, key: &str) -> Option<FieldKind> {
        self.fields.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Add every field of `other` that this schema does not already define.
    pub fn extend(&mut self, other: &Schema) {
        for (key, kind) in &other.fields {
            self.fields.entry(key.clone()).or_insert(*kind);
        }
    }
}
