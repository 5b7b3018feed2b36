/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Requirement checking.
//!
//! Rules are checked against the record after triggers have run, so the
//! visibility a trigger sets decides whether a trait is required.

use serde::Serialize;
use std::fmt;
use styleguide_core::{Item, Record, Rule, StyleSpec};

/// The kind of a requirement failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// One or more keys are missing.
    Requires,
    /// Two mutually exclusive keys are both present.
    Either,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Requires => write!(f, "requires"),
            ErrorKind::Either => write!(f, "either"),
        }
    }
}

/// A failed requirement rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementError {
    pub message: ErrorKind,
    pub traits: Vec<String>,
}

impl RequirementError {
    pub fn requires(traits: Vec<String>) -> Self {
        Self {
            message: ErrorKind::Requires,
            traits,
        }
    }

    pub fn either(first: &str, second: &str) -> Self {
        Self {
            message: ErrorKind::Either,
            traits: vec![first.to_string(), second.to_string()],
        }
    }
}

impl fmt::Display for RequirementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.traits.join(", "))
    }
}

/// Check every rule of `style` in declaration order.
///
/// `items` is the style's item list as edited by triggers for this record.
pub fn validate(style: &StyleSpec, items: &[Item], record: &Record) -> Vec<RequirementError> {
    style
        .rules()
        .iter()
        .filter_map(|rule| check(rule, style, items, record))
        .collect()
}

fn check(
    rule: &Rule,
    style: &StyleSpec,
    items: &[Item],
    record: &Record,
) -> Option<RequirementError> {
    match rule {
        Rule::Required { key } => {
            let mut visible = items
                .iter()
                .filter_map(Item::as_trait)
                .filter(|t| t.key == *key && t.visibility.is_visible())
                .peekable();
            visible.peek()?;
            let mut shown = false;
            let mut stubbed = false;
            for trait_spec in visible {
                shown |= trait_spec.visibility.is_shown();
                stubbed |= trait_spec.stub.is_some();
            }
            if style.is_exempt(key) && !shown {
                return None;
            }
            if record.is_present(key) || stubbed {
                return None;
            }
            Some(RequirementError::requires(vec![key.clone()]))
        }
        Rule::Optional { .. } => None,
        Rule::EitherOf {
            first,
            second,
            optional,
        } => match (record.is_present(first), record.is_present(second)) {
            (true, true) => Some(RequirementError::either(first, second)),
            (true, false) | (false, true) => None,
            (false, false) if *optional => None,
            (false, false) => Some(RequirementError::requires(vec![
                first.clone(),
                second.clone(),
            ])),
        },
        Rule::AllOf { keys, optional } => {
            let missing: Vec<String> = keys
                .iter()
                .filter(|key| !record.is_present(key))
                .cloned()
                .collect();
            if missing.is_empty() || (*optional && missing.len() == keys.len()) {
                None
            } else {
                Some(RequirementError::requires(missing))
            }
        }
        Rule::AtLeastOneOf { keys } => {
            if keys.iter().any(|key| record.is_present(key)) {
                None
            } else {
                Some(RequirementError::requires(keys.clone()))
            }
        }
    }
}
