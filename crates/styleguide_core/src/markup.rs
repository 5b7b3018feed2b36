/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Segment-level text styling.
//!
//! A rendered trait has three segments: the literal prefix, the main value,
//! and the literal suffix. Each style is switched on for a subset of those
//! segments, independently of the others.

use bitflags::bitflags;
use serde::Serialize;
use thiserror::Error;

bitflags! {
    /// A set of trait segments.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct Segments: u8 {
        const PREFIX = 0b001;
        const MAIN = 0b010;
        const SUFFIX = 0b100;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown segment `{0}` (expected prefix, main, or suffix)")]
pub struct UnknownSegment(pub String);

impl Segments {
    /// Parse a space-separated segment list such as `"prefix main"`.
    ///
    /// An empty list means every segment.
    pub fn parse_list(list: &str) -> Result<Self, UnknownSegment> {
        let mut segments = Segments::empty();
        for word in list.split_whitespace() {
            segments |= match word {
                "prefix" => Segments::PREFIX,
                "main" => Segments::MAIN,
                "suffix" => Segments::SUFFIX,
                other => return Err(UnknownSegment(other.to_string())),
            };
        }
        if segments.is_empty() {
            segments = Segments::all();
        }
        Ok(segments)
    }
}

/// A text style a segment can carry.
///
/// The declaration order is the nesting order: earlier styles wrap later ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    Bold,
    Italics,
}

impl TextStyle {
    pub const ALL: [TextStyle; 2] = [TextStyle::Bold, TextStyle::Italics];
}

/// The segments each style is active on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Markup {
    pub bold: Segments,
    pub italics: Segments,
}

impl Markup {
    /// Activate `style` on exactly `segments`, replacing its previous set.
    pub fn set(&mut self, style: TextStyle, segments: Segments) {
        match style {
            TextStyle::Bold => self.bold = segments,
            TextStyle::Italics => self.italics = segments,
        }
    }

    pub fn segments(&self, style: TextStyle) -> Segments {
        match style {
            TextStyle::Bold => self.bold,
            TextStyle::Italics => self.italics,
        }
    }

    /// Styles active on `segment`, outermost first.
    pub fn styles_for(&self, segment: Segments) -> impl Iterator<Item = TextStyle> + '_ {
        TextStyle::ALL
            .into_iter()
            .filter(move |style| self.segments(*style).contains(segment))
    }

    pub fn is_plain(&self) -> bool {
        self.bold.is_empty() && self.italics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_segment_list() {
        assert_eq!(
            Segments::parse_list("prefix main").unwrap(),
            Segments::PREFIX | Segments::MAIN
        );
        assert_eq!(Segments::parse_list("").unwrap(), Segments::all());
        assert!(Segments::parse_list("prefix body").is_err());
    }

    #[test]
    fn test_set_replaces_previous_subset() {
        let mut markup = Markup::default();
        markup.set(TextStyle::Bold, Segments::all());
        markup.set(TextStyle::Bold, Segments::MAIN);
        assert_eq!(markup.bold, Segments::MAIN);
        assert!(markup.italics.is_empty());
    }

    #[test]
    fn test_styles_nest_bold_first() {
        let mut markup = Markup::default();
        markup.set(TextStyle::Italics, Segments::MAIN);
        markup.set(TextStyle::Bold, Segments::MAIN);
        let styles: Vec<_> = markup.styles_for(Segments::MAIN).collect();
        assert_eq!(styles, vec![TextStyle::Bold, TextStyle::Italics]);
    }
}
