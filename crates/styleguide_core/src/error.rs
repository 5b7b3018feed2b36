/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// A fatal error in a style definition. Compilation stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("style {style}: trait `{key}` is declared twice (at `{reference}`)")]
    DuplicateTraitKey {
        style: String,
        key: String,
        reference: String,
    },

    #[error("style {style}: `{call}` names no trait or text `{key}`")]
    MissingTraitKey {
        style: String,
        key: String,
        call: String,
    },

    #[error("style {style}: a style must have a title")]
    MissingTitle { style: String },

    #[error("style {style}: `{reference}` does not contain a known field key")]
    MalformedTraitReference { style: String, reference: String },

    #[error("style {style}: cannot build the field key matcher: {message}")]
    KeyMatcher { style: String, message: String },
}

impl CompileError {
    /// Id of the style the error was raised in.
    pub fn style(&self) -> &str {
        match self {
            CompileError::DuplicateTraitKey { style, .. }
            | CompileError::MissingTraitKey { style, .. }
            | CompileError::MissingTitle { style }
            | CompileError::MalformedTraitReference { style, .. }
            | CompileError::KeyMatcher { style, .. } => style,
        }
    }
}
