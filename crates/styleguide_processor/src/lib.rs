/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Styleguide Processor
//!
//! Renders records against styles compiled by `styleguide_core`: runs the
//! style's triggers, resolves each visible trait from the record, applies
//! segment markup, and checks the requirement rules.
//!
//! # Example
//!
//! ```rust
//! use styleguide_core::{compile, Contributor, DateValue, Record, Segments, StyleDefinition};
//! use styleguide_processor::render;
//!
//! let style = compile(&StyleDefinition::new("SIMPLE", "Simple", |s| {
//!     s.add_trait("author")
//!         .add_trait_with(" (datePublished)", |d| {
//!             d.stub("n.d.");
//!         })
//!         .add_trait_with(" title.", |t| {
//!             t.italics_only(Segments::MAIN);
//!         });
//! }))
//! .unwrap();
//!
//! let record = Record::new()
//!     .with("author", vec![Contributor::new("Thomas", "Kuhn")])
//!     .with("datePublished", DateValue::year("1962"))
//!     .with("title", "The Structure of Scientific Revolutions");
//!
//! let result = render(&style, &record);
//! assert!(result.errors.is_empty());
//! assert_eq!(
//!     result.string,
//!     "Kuhn, T. (1962) <i>The Structure of Scientific Revolutions</i>."
//! );
//! ```

pub mod embedded;
pub mod error;
pub mod guide;
pub mod io;
pub mod processor;
pub mod render;
pub mod triggers;
pub mod validation;
pub mod values;

pub use embedded::embedded_guide;
pub use error::ProcessorError;
pub use guide::{GuideConfig, GuideEntry, StyleGuide};
pub use io::{load_guide_config, load_records, load_schema};
pub use processor::{render, render_all, render_with, RenderResult};
pub use render::{Html, OutputFormat, PlainText};
pub use validation::{ErrorKind, RequirementError};
pub use values::{FieldValues, ProcValues};
