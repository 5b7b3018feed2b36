/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering a record against a compiled style.
//!
//! A render runs the style's triggers against its own copy of the items,
//! resolves and composes every visible item in declaration order, and then
//! checks the requirement rules. Any requirement error discards the output.

use crate::render::{compose, Html, OutputFormat};
use crate::triggers::apply_triggers;
use crate::validation::{validate, RequirementError};
use crate::values::resolve;
use serde::Serialize;
use styleguide_core::{Item, Record, StyleSpec};
use tracing::trace;

/// The output of one render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderResult {
    /// The rendered text; empty when `errors` is not.
    pub string: String,
    /// Requirement failures in rule declaration order.
    pub errors: Vec<RequirementError>,
}

impl RenderResult {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Render `record` with the default HTML markup.
pub fn render(style: &StyleSpec, record: &Record) -> RenderResult {
    render_with::<Html>(style, record)
}

/// Render `record` in the output format `F`.
pub fn render_with<F: OutputFormat<Output = String>>(
    style: &StyleSpec,
    record: &Record,
) -> RenderResult {
    let format = F::default();
    let items = apply_triggers(style, record);

    let parts: Vec<String> = items
        .iter()
        .filter(|item| item.visibility().is_visible())
        .filter_map(|item| render_item(&format, item, record))
        .collect();

    let errors = validate(style, &items, record);
    let string = if errors.is_empty() {
        format.finish(format.join(parts, ""))
    } else {
        String::new()
    };
    RenderResult { string, errors }
}

/// Render many records against one style.
pub fn render_all(style: &StyleSpec, records: &[Record]) -> Vec<RenderResult> {
    records.iter().map(|record| render(style, record)).collect()
}

fn render_item<F: OutputFormat<Output = String>>(
    format: &F,
    item: &Item,
    record: &Record,
) -> Option<String> {
    let rendered = match item {
        Item::Trait(spec) => compose(format, &resolve(spec, record)?, &spec.markup),
        Item::Text(text) => format.text(&text.content),
    };
    trace!(key = item.key(), rendered = %rendered, "rendered item");
    Some(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlainText;
    use styleguide_core::{compile, StyleDefinition};

    fn style() -> StyleSpec {
        compile(&StyleDefinition::new("RENDER", "Render", |s| {
            s.add_trait_with("(title)", |t| {
                t.bold();
            })
            .text(" / ")
            .add_trait_with("volume", |v| {
                v.stub("n.v.");
            });
        }))
        .unwrap()
    }

    #[test]
    fn test_render_in_declaration_order() {
        let result = render(
            &style(),
            &Record::new().with("title", "foo").with("volume", 2),
        );
        assert_eq!(result.string, "<b>(</b><b>foo</b><b>)</b> / 2");
        assert!(result.is_ok());
    }

    #[test]
    fn test_render_plain_text() {
        let result = render_with::<PlainText>(&style(), &Record::new().with("title", "foo"));
        assert_eq!(result.string, "(foo) / n.v.");
    }

    #[test]
    fn test_errors_discard_output() {
        let result = render(&style(), &Record::new().with("volume", 2));
        assert_eq!(result.string, "");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].traits, vec!["title".to_string()]);
    }

    #[test]
    fn test_render_all() {
        let records = vec![Record::new().with("title", "a"), Record::new()];
        let results = render_all(&style(), &records);
        assert!(results[0].is_ok());
        assert!(!results[1].is_ok());
    }
}
