/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Compiled style items: traits and text blocks.

use crate::markup::Markup;
use crate::schema::FieldKind;
use serde::Serialize;
use tracing::warn;

/// Whether an item renders, and whether it was explicitly shown.
///
/// An explicitly shown trait is always subject to its `Required` rule, even
/// when other rules exempt it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Default,
    Shown,
    Hidden,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        !matches!(self, Visibility::Hidden)
    }

    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

/// Date rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateConfig {
    /// Format pattern such as `YYYY` or `MMMM D, YYYY`.
    pub pattern: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            pattern: "YYYY".to_string(),
        }
    }
}

/// Contributor list rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameConfig {
    /// Per-name pattern built from `Last`, `First`, and `F` (initial).
    pub pattern: String,
    /// Placed between names, except before the last one.
    pub separator: String,
    /// Placed before the last name.
    pub final_separator: String,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            pattern: "Last, F.".to_string(),
            separator: ", ".to_string(),
            final_separator: " & ".to_string(),
        }
    }
}

/// One choice of an enum trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumEntry {
    pub index: usize,
    /// Raw field value this entry matches.
    pub value: String,
    pub display: String,
    /// When set, the entry matches on the record's selector instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// Ordered enum entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnumMapping {
    entries: Vec<EnumEntry>,
}

impl EnumMapping {
    pub fn add(&mut self, value: impl Into<String>, display: impl Into<String>) -> &mut Self {
        self.push(value.into(), display.into(), None)
    }

    /// Add an entry selected by `selector` rather than by its raw value.
    pub fn add_selected(
        &mut self,
        value: impl Into<String>,
        display: impl Into<String>,
        selector: impl Into<String>,
    ) -> &mut Self {
        self.push(value.into(), display.into(), Some(selector.into()))
    }

    /// Overwrite the display text of entry `index`. Selection is unchanged.
    pub fn relabel(&mut self, index: usize, display: impl Into<String>) -> &mut Self {
        match self.entries.get_mut(index) {
            Some(entry) => entry.display = display.into(),
            None => warn!(index, "relabel of unknown enum entry ignored"),
        }
        self
    }

    pub fn entries(&self) -> &[EnumEntry] {
        &self.entries
    }

    pub fn uses_selectors(&self) -> bool {
        self.entries.iter().any(|e| e.selector.is_some())
    }

    fn push(&mut self, value: String, display: String, selector: Option<String>) -> &mut Self {
        let index = self.entries.len();
        self.entries.push(EnumEntry {
            index,
            value,
            display,
            selector,
        });
        self
    }
}

/// What a trait resolves, with the configuration for that kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "config", rename_all = "kebab-case")]
pub enum TraitKind {
    Text,
    Number,
    Date(DateConfig),
    Contributors(NameConfig),
    Enum(EnumMapping),
}

impl TraitKind {
    pub fn for_field(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => TraitKind::Text,
            FieldKind::Number => TraitKind::Number,
            FieldKind::Date => TraitKind::Date(DateConfig::default()),
            FieldKind::Contributors => TraitKind::Contributors(NameConfig::default()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TraitKind::Text => "text",
            TraitKind::Number => "number",
            TraitKind::Date(_) => "date",
            TraitKind::Contributors(_) => "contributors",
            TraitKind::Enum(_) => "enum",
        }
    }
}

/// A renderable binding to one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitSpec {
    pub key: String,
    pub prefix: String,
    pub suffix: String,
    pub kind: TraitKind,
    pub visibility: Visibility,
    /// Rendered in place of absent data.
    pub stub: Option<String>,
    pub markup: Markup,
    /// Declaration index within the style.
    pub order: usize,
}

/// A literal text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpec {
    pub key: String,
    pub content: String,
    pub visibility: Visibility,
    pub order: usize,
}

/// An entry of the style's ordered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "item", rename_all = "kebab-case")]
pub enum Item {
    Trait(TraitSpec),
    Text(TextSpec),
}

impl Item {
    pub fn key(&self) -> &str {
        match self {
            Item::Trait(t) => &t.key,
            Item::Text(t) => &t.key,
        }
    }

    pub fn order(&self) -> usize {
        match self {
            Item::Trait(t) => t.order,
            Item::Text(t) => t.order,
        }
    }

    pub fn visibility(&self) -> Visibility {
        match self {
            Item::Trait(t) => t.visibility,
            Item::Text(t) => t.visibility,
        }
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        match self {
            Item::Trait(t) => t.visibility = visibility,
            Item::Text(t) => t.visibility = visibility,
        }
    }

    pub fn as_trait(&self) -> Option<&TraitSpec> {
        match self {
            Item::Trait(t) => Some(t),
            Item::Text(_) => None,
        }
    }
}
