/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Requirement rules over field presence.

use serde::Serialize;

/// A presence constraint, checked against each record at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum Rule {
    /// Created implicitly for every declared trait that no other rule names.
    Required { key: String },
    Optional { key: String },
    /// Exactly one of the two keys must be present.
    EitherOf {
        first: String,
        second: String,
        optional: bool,
    },
    /// All keys must be present; with `optional`, none present is also fine.
    AllOf { keys: Vec<String>, optional: bool },
    AtLeastOneOf { keys: Vec<String> },
}

impl Rule {
    /// Keys named by this rule.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Rule::Required { key } | Rule::Optional { key } => vec![key.as_str()],
            Rule::EitherOf { first, second, .. } => vec![first.as_str(), second.as_str()],
            Rule::AllOf { keys, .. } | Rule::AtLeastOneOf { keys } => {
                keys.iter().map(String::as_str).collect()
            }
        }
    }

    /// Whether this rule takes over the requirement of its keys, so that no
    /// implicit `Required` applies to them.
    pub fn exempts_keys(&self) -> bool {
        !matches!(self, Rule::Required { .. })
    }
}
