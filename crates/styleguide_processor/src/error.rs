/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use styleguide_core::CompileError;
use thiserror::Error;

/// Errors from the style guide, record loading, and the CLI.
///
/// Requirement failures are not errors here: they are collected into a
/// render's [`RenderResult`](crate::RenderResult).
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} parse error: {1}")]
    ParseError(String, String),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("style {0} not found")]
    UnknownStyle(String),

    #[error("style {id} is already registered (adding {source_type})")]
    DuplicateStyleId { id: String, source_type: String },

    #[error("style `{title}` has no id")]
    MissingStyleId { title: String },
}

impl From<serde_json::Error> for ProcessorError {
    fn from(e: serde_json::Error) -> Self {
        ProcessorError::ParseError("JSON".to_string(), e.to_string())
    }
}

impl From<serde_yaml::Error> for ProcessorError {
    fn from(e: serde_yaml::Error) -> Self {
        ProcessorError::ParseError("YAML".to_string(), e.to_string())
    }
}
