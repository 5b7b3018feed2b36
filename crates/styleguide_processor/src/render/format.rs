/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

/// Trait for defining how rendered segments are marked up in a specific
/// format.
pub trait OutputFormat: Default + Clone {
    /// The type used for intermediate rendered content.
    type Output;

    /// Convert a raw string into the format's output type.
    fn text(&self, s: &str) -> Self::Output;

    /// Join multiple outputs into a single output using a delimiter.
    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output;

    /// Convert the intermediate output into the final result string.
    fn finish(&self, output: Self::Output) -> String;

    /// Render content with emphasis (italics).
    fn emph(&self, content: Self::Output) -> Self::Output;

    /// Render content with strong emphasis (bold).
    fn strong(&self, content: Self::Output) -> Self::Output;
}
