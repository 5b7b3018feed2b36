/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Conditional mutation rules.
//!
//! A trigger is declared with `upon(gate, callback)`. At render time, if the
//! record has the gate field, the callback runs against a [`TriggerContext`]
//! that edits the render's own copy of the style's items. The compiled style
//! is never touched, and the copy is only made on the first edit.

use crate::config::TraitConfig;
use crate::record::Record;
use crate::spec::{Item, Visibility};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Callback run when a trigger's gate field is present.
pub type TriggerFn = dyn Fn(&mut TriggerContext<'_>) + Send + Sync;

/// A declared trigger.
#[derive(Clone)]
pub struct Trigger {
    gate: String,
    callback: Arc<TriggerFn>,
}

impl Trigger {
    pub fn new(
        gate: impl Into<String>,
        callback: impl Fn(&mut TriggerContext<'_>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            gate: gate.into(),
            callback: Arc::new(callback),
        }
    }

    /// The field whose presence fires this trigger.
    pub fn gate(&self) -> &str {
        &self.gate
    }

    pub fn is_gated_open(&self, record: &Record) -> bool {
        record.is_present(&self.gate)
    }

    pub fn apply(&self, context: &mut TriggerContext<'_>) {
        (self.callback)(context);
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

/// Plain field overrides merged onto an item by [`TriggerContext::set`].
///
/// `prefix`, `suffix`, and `stub` apply to traits; `content` applies to text
/// blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub stub: Option<String>,
    pub content: Option<String>,
}

impl Patch {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self::default().with_prefix(prefix)
    }

    pub fn suffix(suffix: impl Into<String>) -> Self {
        Self::default().with_suffix(suffix)
    }

    pub fn stub(stub: impl Into<String>) -> Self {
        Self::default().with_stub(stub)
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self::default().with_content(content)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_stub(mut self, stub: impl Into<String>) -> Self {
        self.stub = Some(stub.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    fn merge_into(&self, item: &mut Item) {
        match item {
            Item::Trait(spec) => {
                if let Some(prefix) = &self.prefix {
                    spec.prefix.clone_from(prefix);
                }
                if let Some(suffix) = &self.suffix {
                    spec.suffix.clone_from(suffix);
                }
                if let Some(stub) = &self.stub {
                    spec.stub = Some(stub.clone());
                }
            }
            Item::Text(spec) => {
                if let Some(content) = &self.content {
                    spec.content.clone_from(content);
                }
            }
        }
    }
}

/// The per-render view a trigger callback edits.
#[derive(Debug)]
pub struct TriggerContext<'a> {
    items: Cow<'a, [Item]>,
    record: &'a Record,
}

impl<'a> TriggerContext<'a> {
    pub fn new(items: &'a [Item], record: &'a Record) -> Self {
        Self {
            items: Cow::Borrowed(items),
            record,
        }
    }

    /// The record being rendered.
    pub fn record(&self) -> &Record {
        self.record
    }

    /// The items as edited so far.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether any trigger has edited the items yet.
    pub fn is_modified(&self) -> bool {
        matches!(self.items, Cow::Owned(_))
    }

    pub fn into_items(self) -> Cow<'a, [Item]> {
        self.items
    }

    /// Merge plain overrides onto every item named `key`.
    pub fn set(&mut self, key: &str, patch: Patch) -> &mut Self {
        self.edit(key, "set", |item| patch.merge_into(item));
        self
    }

    /// Re-run trait configuration on every trait named `key`.
    pub fn set_with(&mut self, key: &str, config: impl Fn(&mut TraitConfig<'_>)) -> &mut Self {
        let mut matching = self
            .items
            .iter()
            .filter(|item| item.key() == key)
            .peekable();
        if matching.peek().is_some() && matching.all(|item| item.as_trait().is_none()) {
            warn!(key, "set_with targets a text block; ignored");
            return self;
        }
        self.edit(key, "set_with", |item| {
            if let Item::Trait(spec) = item {
                config(&mut TraitConfig::new(spec));
            }
        });
        self
    }

    pub fn show(&mut self, key: &str) -> &mut Self {
        self.edit(key, "show", |item| item.set_visibility(Visibility::Shown));
        self
    }

    pub fn hide(&mut self, key: &str) -> &mut Self {
        self.edit(key, "hide", |item| item.set_visibility(Visibility::Hidden));
        self
    }

    fn edit(&mut self, key: &str, operation: &str, mut apply: impl FnMut(&mut Item)) {
        if !self.items.iter().any(|item| item.key() == key) {
            warn!(key, operation, "trigger targets an unknown key; ignored");
            return;
        }
        for item in self.items.to_mut().iter_mut().filter(|i| i.key() == key) {
            apply(item);
        }
    }
}
