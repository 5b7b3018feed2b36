/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output formats and segment markup.

pub mod compose;
pub mod format;
pub mod html;
pub mod plain;

pub use compose::compose;
pub use format::OutputFormat;
pub use html::Html;
pub use plain::PlainText;
