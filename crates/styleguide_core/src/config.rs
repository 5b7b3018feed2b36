/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-item configuration handles.
//!
//! The same handles are used when a trait is declared, when field defaults
//! are applied, and when a trigger re-configures a trait at render time.

use crate::markup::{Segments, TextStyle};
use crate::spec::{EnumMapping, TextSpec, TraitKind, TraitSpec, Visibility};
use tracing::warn;

/// Configures one trait.
#[derive(Debug)]
pub struct TraitConfig<'a> {
    spec: &'a mut TraitSpec,
}

impl<'a> TraitConfig<'a> {
    pub fn new(spec: &'a mut TraitSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &TraitSpec {
        self.spec
    }

    pub fn key(&self) -> &str {
        &self.spec.key
    }

    pub fn prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.spec.prefix = prefix.into();
        self
    }

    pub fn suffix(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.spec.suffix = suffix.into();
        self
    }

    /// Text rendered when the field's data is absent.
    pub fn stub(&mut self, stub: impl Into<String>) -> &mut Self {
        self.spec.stub = Some(stub.into());
        self
    }

    /// Set the date or name pattern.
    pub fn format(&mut self, pattern: impl Into<String>) -> &mut Self {
        match &mut self.spec.kind {
            TraitKind::Date(date) => date.pattern = pattern.into(),
            TraitKind::Contributors(names) => names.pattern = pattern.into(),
            other => warn!(
                key = %self.spec.key,
                kind = other.name(),
                "format has no effect on this trait kind"
            ),
        }
        self
    }

    /// Set the contributor separators: `separator` between names, and
    /// `final_separator` before the last one.
    pub fn separators(
        &mut self,
        separator: impl Into<String>,
        final_separator: impl Into<String>,
    ) -> &mut Self {
        match &mut self.spec.kind {
            TraitKind::Contributors(names) => {
                names.separator = separator.into();
                names.final_separator = final_separator.into();
            }
            other => warn!(
                key = %self.spec.key,
                kind = other.name(),
                "separators only apply to contributor traits"
            ),
        }
        self
    }

    /// Bold every segment.
    pub fn bold(&mut self) -> &mut Self {
        self.style(TextStyle::Bold, Segments::all())
    }

    /// Bold exactly `segments`, replacing any earlier bold segments.
    pub fn bold_only(&mut self, segments: Segments) -> &mut Self {
        self.style(TextStyle::Bold, segments)
    }

    /// Italicize every segment.
    pub fn italics(&mut self) -> &mut Self {
        self.style(TextStyle::Italics, Segments::all())
    }

    /// Italicize exactly `segments`, replacing any earlier italic segments.
    pub fn italics_only(&mut self, segments: Segments) -> &mut Self {
        self.style(TextStyle::Italics, segments)
    }

    pub fn style(&mut self, style: TextStyle, segments: Segments) -> &mut Self {
        self.spec.markup.set(style, segments);
        self
    }

    /// Make the trait visible and require its data.
    pub fn show(&mut self) -> &mut Self {
        self.spec.visibility = Visibility::Shown;
        self
    }

    /// Suppress the trait and its requirement.
    pub fn hide(&mut self) -> &mut Self {
        self.spec.visibility = Visibility::Hidden;
        self
    }

    /// Turn the trait into an enum and return its entries.
    ///
    /// Calling this on a trait that is already an enum returns the existing
    /// entries, so triggers can relabel them.
    pub fn enumeration(&mut self) -> &mut EnumMapping {
        if !matches!(self.spec.kind, TraitKind::Enum(_)) {
            self.spec.kind = TraitKind::Enum(EnumMapping::default());
        }
        match &mut self.spec.kind {
            TraitKind::Enum(mapping) => mapping,
            _ => unreachable!("trait kind was just set to enum"),
        }
    }
}

/// Configures one text block.
#[derive(Debug)]
pub struct TextConfig<'a> {
    spec: &'a mut TextSpec,
}

impl<'a> TextConfig<'a> {
    pub fn new(spec: &'a mut TextSpec) -> Self {
        Self { spec }
    }

    pub fn key(&self) -> &str {
        &self.spec.key
    }

    pub fn content(&mut self, content: impl Into<String>) -> &mut Self {
        self.spec.content = content.into();
        self
    }

    pub fn show(&mut self) -> &mut Self {
        self.spec.visibility = Visibility::Shown;
        self
    }

    pub fn hide(&mut self) -> &mut Self {
        self.spec.visibility = Visibility::Hidden;
        self
    }
}
