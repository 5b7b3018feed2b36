/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Trigger evaluation.

use std::borrow::Cow;
use styleguide_core::{Item, Record, StyleSpec, TriggerContext};
use tracing::trace;

/// Apply every trigger whose gate field is present, in declaration order.
///
/// Returns the style's own items when no trigger edits them.
pub fn apply_triggers<'a>(style: &'a StyleSpec, record: &'a Record) -> Cow<'a, [Item]> {
    let mut context = TriggerContext::new(style.items(), record);
    for trigger in style.triggers() {
        if trigger.is_gated_open(record) {
            trace!(style = style.id(), gate = trigger.gate(), "trigger fired");
            trigger.apply(&mut context);
        }
    }
    context.into_items()
}
