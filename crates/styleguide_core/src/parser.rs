/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Trait reference parsing.
//!
//! A trait reference is a field key embedded in literal text:
//! `"(datePublished)."` declares a `datePublished` trait with prefix `(` and
//! suffix `).`. Only keys in the compile pass's [`Schema`] are recognized.

use crate::schema::{FieldKind, Schema};
use regex::{Regex, RegexBuilder};

/// Compiled size limit of the key matcher.
pub const MATCHER_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A parsed trait reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitReference {
    pub prefix: String,
    pub key: String,
    pub suffix: String,
}

/// The known-key set of one compilation pass, with a cached matcher.
#[derive(Debug, Clone)]
pub struct KnownKeys {
    schema: Schema,
    matcher: Option<Regex>,
    size_limit: usize,
}

impl KnownKeys {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            matcher: None,
            size_limit: MATCHER_SIZE_LIMIT,
        }
    }

    pub fn with_size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self.matcher = None;
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn declare(&mut self, key: impl Into<String>, kind: FieldKind) {
        self.schema.insert(key, kind);
        self.matcher = None;
    }

    /// Split `reference` around the leftmost known key.
    ///
    /// When several keys start at the same position the longest one wins, so
    /// `dateAccessed` is never read as a `date` key followed by `Accessed`.
    ///
    /// Fails only when the matcher for the key set cannot be built.
    pub fn parse(&mut self, reference: &str) -> Result<Option<TraitReference>, regex::Error> {
        if self.matcher.is_none() {
            self.matcher = build_matcher(&self.schema, self.size_limit)?;
        }
        let Some(found) = self.matcher.as_ref().and_then(|m| m.find(reference)) else {
            return Ok(None);
        };
        Ok(Some(TraitReference {
            prefix: reference[..found.start()].to_string(),
            key: found.as_str().to_string(),
            suffix: reference[found.end()..].to_string(),
        }))
    }
}

/// Parse a reference against a one-off key set.
pub fn parse_reference(
    reference: &str,
    schema: &Schema,
) -> Result<Option<TraitReference>, regex::Error> {
    KnownKeys::new(schema.clone()).parse(reference)
}

fn build_matcher(schema: &Schema, size_limit: usize) -> Result<Option<Regex>, regex::Error> {
    let mut keys: Vec<&str> = schema.keys().filter(|k| !k.is_empty()).collect();
    if keys.is_empty() {
        return Ok(None);
    }
    // Alternation is leftmost-first, so longer keys must come first.
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let pattern = keys
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&pattern)
        .size_limit(size_limit)
        .build()
        .map(Some)
}
