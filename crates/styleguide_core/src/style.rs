/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Compiled styles.

use crate::rules::Rule;
use crate::spec::{Item, TraitSpec};
use crate::trigger::Trigger;
use indexmap::IndexSet;

/// A compiled style: ordered items, triggers, and requirement rules.
///
/// Immutable once built. Rendering works on a per-call copy of the items,
/// so one `StyleSpec` can be shared across threads and renders.
#[derive(Debug, Clone)]
pub struct StyleSpec {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) items: Vec<Item>,
    pub(crate) triggers: Vec<Trigger>,
    pub(crate) rules: Vec<Rule>,
    pub(crate) exempt: IndexSet<String>,
    pub(crate) inherited: Vec<String>,
}

impl StyleSpec {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Traits and text blocks in declaration order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    /// Requirement rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// True when an explicit rule (optional, either, all, atleast) names `key`.
    pub fn is_exempt(&self, key: &str) -> bool {
        self.exempt.contains(key)
    }

    /// Names of the mixins applied while building, in application order.
    pub fn inherited(&self) -> &[String] {
        &self.inherited
    }

    pub fn traits(&self) -> impl Iterator<Item = &TraitSpec> {
        self.items.iter().filter_map(Item::as_trait)
    }

    pub fn find(&self, key: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_style_spec_is_shareable() {
        assert_send_sync::<StyleSpec>();
    }
}
