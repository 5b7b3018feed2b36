/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Segment markup.
//!
//! Each non-empty segment of a resolved trait is wrapped on its own, so
//! `bold()` on `(title)` gives `<b>(</b><b>foo</b><b>)</b>` rather than a
//! single pair around the whole trait.

use super::format::OutputFormat;
use crate::values::ProcValues;
use styleguide_core::{Markup, Segments, TextStyle};

/// Compose a resolved trait into the output format.
pub fn compose<F: OutputFormat>(format: &F, values: &ProcValues, markup: &Markup) -> F::Output {
    let segments = [
        (Segments::PREFIX, values.prefix.as_str()),
        (Segments::MAIN, values.value.as_str()),
        (Segments::SUFFIX, values.suffix.as_str()),
    ];
    let parts = segments
        .into_iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(segment, text)| style_segment(format, text, markup, segment))
        .collect();
    format.join(parts, "")
}

fn style_segment<F: OutputFormat>(
    format: &F,
    text: &str,
    markup: &Markup,
    segment: Segments,
) -> F::Output {
    let styles: Vec<TextStyle> = markup.styles_for(segment).collect();
    // Innermost style is applied first.
    styles
        .into_iter()
        .rev()
        .fold(format.text(text), |content, style| match style {
            TextStyle::Bold => format.strong(content),
            TextStyle::Italics => format.emph(content),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Html, PlainText};

    fn values(prefix: &str, value: &str, suffix: &str) -> ProcValues {
        ProcValues {
            prefix: prefix.to_string(),
            value: value.to_string(),
            suffix: suffix.to_string(),
        }
    }

    #[test]
    fn test_plain_markup_concatenates() {
        let out = compose(&Html, &values("(", "foo", ")"), &Markup::default());
        assert_eq!(out, "(foo)");
    }

    #[test]
    fn test_each_segment_wrapped_separately() {
        let markup = Markup {
            bold: Segments::all(),
            italics: Segments::empty(),
        };
        let out = compose(&Html, &values("(", "foo", ")"), &markup);
        assert_eq!(out, "<b>(</b><b>foo</b><b>)</b>");
    }

    #[test]
    fn test_bold_wraps_italics() {
        let markup = Markup {
            bold: Segments::PREFIX | Segments::MAIN,
            italics: Segments::MAIN | Segments::SUFFIX,
        };
        let out = compose(&Html, &values("Title:", "foo", "..."), &markup);
        assert_eq!(out, "<b>Title:</b><b><i>foo</i></b><i>...</i>");
    }

    #[test]
    fn test_empty_segments_are_not_wrapped() {
        let markup = Markup {
            bold: Segments::all(),
            italics: Segments::empty(),
        };
        assert_eq!(
            compose(&Html, &values("", "bar", ""), &markup),
            "<b>bar</b>"
        );
    }

    #[test]
    fn test_plain_text_drops_markers() {
        let markup = Markup {
            bold: Segments::all(),
            italics: Segments::MAIN,
        };
        assert_eq!(
            compose(&PlainText, &values("(", "foo", ")"), &markup),
            "(foo)"
        );
    }
}
