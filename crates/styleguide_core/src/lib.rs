/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Styleguide Core
//!
//! Data model and compiler for trait-driven citation styles. A style is a
//! routine that declares, in output order, field bindings ("traits") such as
//! `"(datePublished)"`, literal text blocks, requirement rules, and
//! triggers that adjust the style when a record has a given field.
//!
//! This crate compiles definitions into an immutable [`StyleSpec`]; the
//! `styleguide_processor` crate renders records against it.

pub mod builder;
pub mod config;
pub mod error;
pub mod markup;
pub mod parser;
pub mod record;
pub mod rules;
pub mod schema;
pub mod spec;
pub mod style;
pub mod trigger;

pub use builder::{compile, compile_with_schema, Mixin, StyleBuilder, StyleDefinition};
pub use config::{TextConfig, TraitConfig};
pub use error::CompileError;
pub use markup::{Markup, Segments, TextStyle};
pub use parser::{parse_reference, TraitReference};
pub use record::{Contributor, DateValue, FieldValue, Record};
pub use rules::Rule;
pub use schema::{FieldKind, Schema};
pub use spec::{
    DateConfig, EnumEntry, EnumMapping, Item, NameConfig, TextSpec, TraitKind, TraitSpec,
    Visibility,
};
pub use style::StyleSpec;
pub use trigger::{Patch, Trigger, TriggerContext};
