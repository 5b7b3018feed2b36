/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Contributor lists.

use crate::values::{FieldValues, Resolved};
use styleguide_core::{Contributor, NameConfig, Record};
use tracing::debug;
use winnow::combinator::{alt, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{take, take_till};

/// One element of a name pattern such as `Last, F.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameToken<'a> {
    Last,
    First,
    Initial,
    Literal(&'a str),
}

fn parse_token<'a>(input: &mut &'a str) -> Result<NameToken<'a>, ErrMode<ContextError>> {
    alt((
        "Last".value(NameToken::Last),
        "First".value(NameToken::First),
        "F".value(NameToken::Initial),
        take_till(1.., |c: char| matches!(c, 'L' | 'F')).map(NameToken::Literal),
        take(1_usize).map(NameToken::Literal),
    ))
    .parse_next(input)
}

pub fn parse_pattern(pattern: &str) -> Vec<NameToken<'_>> {
    let mut input = pattern;
    let tokens: Result<Vec<_>, ErrMode<ContextError>> =
        repeat(0.., parse_token).parse_next(&mut input);
    tokens.unwrap_or_default()
}

/// Format one contributor. A contributor with no first name renders as the
/// last name alone, whatever the pattern.
pub fn format_name(contributor: &Contributor, pattern: &str) -> String {
    if contributor.first.is_empty() {
        return contributor.last.clone();
    }
    parse_pattern(pattern)
        .into_iter()
        .fold(String::new(), |mut out, token| {
            match token {
                NameToken::Last => out.push_str(&contributor.last),
                NameToken::First => out.push_str(&contributor.first),
                NameToken::Initial => out.extend(contributor.first.chars().next()),
                NameToken::Literal(text) => out.push_str(text),
            }
            out
        })
}

/// Format a list of names, joining with `separator` and placing
/// `final_separator` before the last one.
pub fn format_contributors(contributors: &[Contributor], config: &NameConfig) -> String {
    let names: Vec<String> = contributors
        .iter()
        .map(|c| format_name(c, &config.pattern))
        .collect();
    match names.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => {
            let head = rest.join(&config.separator);
            format!("{}{}{}", head, config.final_separator, last)
        }
    }
}

impl FieldValues for NameConfig {
    fn values(&self, key: &str, record: &Record) -> Resolved {
        let Some(value) = record.get(key) else {
            return Resolved::Absent;
        };
        match value.as_contributors() {
            Some([]) => Resolved::Absent,
            Some(list) => Resolved::Value(format_contributors(list, self)),
            None => {
                debug!(key, "contributor trait given a non-list value");
                Resolved::Unresolved
            }
        }
    }
}
