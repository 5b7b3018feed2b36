/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Style compilation.
//!
//! A style definition is a routine run against a [`StyleBuilder`]:
//!
//! ```rust
//! use styleguide_core::{compile, StyleDefinition};
//!
//! let definition = StyleDefinition::new("BOOK0001", "Book", |style| {
//!     style
//!         .add_trait_with("author", |a| {
//!             a.separators(", ", " & ").format("Last, F.");
//!         })
//!         .add_trait(" (datePublished).")
//!         .optional("datePublished")
//!         .add_trait_with(" title.", |t| {
//!             t.italics_only(styleguide_core::Segments::MAIN);
//!         });
//! });
//!
//! let spec = compile(&definition).unwrap();
//! assert_eq!(spec.items().len(), 3);
//! ```
//!
//! The builder latches the first error; every later call is a no-op and
//! [`StyleBuilder::finish`] returns that error.

use crate::config::{TextConfig, TraitConfig};
use crate::error::CompileError;
use crate::parser::KnownKeys;
use crate::rules::Rule;
use crate::schema::{FieldKind, Schema};
use crate::spec::{Item, TextSpec, TraitKind, TraitSpec, Visibility};
use crate::style::StyleSpec;
use crate::trigger::{Trigger, TriggerContext};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

type FieldDefault = Box<dyn Fn(&mut TraitConfig<'_>)>;

/// A named, reusable builder routine applied with [`StyleBuilder::inherit`].
#[derive(Clone, Copy)]
pub struct Mixin {
    name: &'static str,
    apply: fn(&mut StyleBuilder),
}

impl Mixin {
    pub const fn new(name: &'static str, apply: fn(&mut StyleBuilder)) -> Self {
        Self { name, apply }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for Mixin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Mixin").field(&self.name).finish()
    }
}

/// A style definition: metadata plus the routine that declares the style.
#[derive(Clone)]
pub struct StyleDefinition {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    build: Arc<dyn Fn(&mut StyleBuilder) + Send + Sync>,
}

impl StyleDefinition {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        build: impl Fn(&mut StyleBuilder) + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            build: Arc::new(build),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Debug for StyleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleDefinition")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Compile a definition against the built-in bibliographic schema.
pub fn compile(definition: &StyleDefinition) -> Result<StyleSpec, CompileError> {
    compile_with_schema(definition, &Schema::default())
}

/// Compile a definition against `schema`.
pub fn compile_with_schema(
    definition: &StyleDefinition,
    schema: &Schema,
) -> Result<StyleSpec, CompileError> {
    if definition.title.trim().is_empty() {
        return Err(CompileError::MissingTitle {
            style: definition.id.clone(),
        });
    }
    // Mixins run before the style's own statements, wherever `inherit` is
    // called: a first pass only collects them.
    let mut scan = StyleBuilder::new(definition.id.clone(), schema.clone());
    scan.collecting = true;
    (definition.build)(&mut scan);

    let mut builder = StyleBuilder::new(definition.id.clone(), schema.clone());
    for mixin in &scan.mixins {
        builder.inherit(mixin);
    }
    (definition.build)(&mut builder);
    builder.finish(definition.title.clone())
}

/// Accumulates a style's items, triggers, and rules.
pub struct StyleBuilder {
    style: String,
    keys: KnownKeys,
    items: Vec<Item>,
    triggers: Vec<Trigger>,
    rules: Vec<Rule>,
    implicitly_required: IndexSet<String>,
    defaults: Vec<(String, FieldDefault)>,
    visibility: IndexMap<String, (Visibility, String)>,
    inherited: Vec<String>,
    mixins: Vec<Mixin>,
    collecting: bool,
    texts: usize,
    error: Option<CompileError>,
}

impl fmt::Debug for StyleBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleBuilder")
            .field("style", &self.style)
            .field("items", &self.items)
            .field("triggers", &self.triggers)
            .field("rules", &self.rules)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl StyleBuilder {
    pub fn new(style: impl Into<String>, schema: Schema) -> Self {
        Self {
            style: style.into(),
            keys: KnownKeys::new(schema),
            items: Vec::new(),
            triggers: Vec::new(),
            rules: Vec::new(),
            implicitly_required: IndexSet::new(),
            defaults: Vec::new(),
            visibility: IndexMap::new(),
            inherited: Vec::new(),
            mixins: Vec::new(),
            collecting: false,
            texts: 0,
            error: None,
        }
    }

    /// The first error raised so far, if any.
    pub fn error(&self) -> Option<&CompileError> {
        self.error.as_ref()
    }

    fn idle(&self) -> bool {
        self.collecting || self.error.is_some()
    }

    /// Declare a field for the rest of this compilation pass.
    pub fn field(&mut self, key: &str, kind: FieldKind) -> &mut Self {
        if !self.idle() {
            self.keys.declare(key, kind);
        }
        self
    }

    /// Declare a trait from a reference such as `"(title)."`.
    pub fn add_trait(&mut self, reference: &str) -> &mut Self {
        self.declare_trait(reference, false, |_| {})
    }

    pub fn add_trait_with(
        &mut self,
        reference: &str,
        config: impl FnOnce(&mut TraitConfig<'_>),
    ) -> &mut Self {
        self.declare_trait(reference, false, config)
    }

    /// Declare a trait whose key may already be in use.
    pub fn add_duplicate_trait(
        &mut self,
        reference: &str,
        config: impl FnOnce(&mut TraitConfig<'_>),
    ) -> &mut Self {
        self.declare_trait(reference, true, config)
    }

    /// Declare a literal text block. Keys are `text`, `text1`, `text2`, ...
    pub fn text(&mut self, content: &str) -> &mut Self {
        self.text_with(content, |_| {})
    }

    pub fn text_with(
        &mut self,
        content: &str,
        config: impl FnOnce(&mut TextConfig<'_>),
    ) -> &mut Self {
        if self.idle() {
            return self;
        }
        let key = match self.texts {
            0 => "text".to_string(),
            n => format!("text{}", n),
        };
        self.texts += 1;
        let mut spec = TextSpec {
            visibility: self.pending_visibility(&key),
            key,
            content: content.to_string(),
            order: self.items.len(),
        };
        config(&mut TextConfig::new(&mut spec));
        self.items.push(Item::Text(spec));
        self
    }

    pub fn optional(&mut self, key: &str) -> &mut Self {
        self.rule(Rule::Optional {
            key: key.to_string(),
        })
    }

    /// Exactly one of `first` and `second` must be present.
    pub fn either(&mut self, first: &str, second: &str) -> &mut Self {
        self.rule(Rule::EitherOf {
            first: first.to_string(),
            second: second.to_string(),
            optional: false,
        })
    }

    /// At most one of `first` and `second` may be present.
    pub fn either_optional(&mut self, first: &str, second: &str) -> &mut Self {
        self.rule(Rule::EitherOf {
            first: first.to_string(),
            second: second.to_string(),
            optional: true,
        })
    }

    pub fn all(&mut self, keys: &[&str]) -> &mut Self {
        self.rule(Rule::AllOf {
            keys: owned(keys),
            optional: false,
        })
    }

    /// All of `keys` or none of them.
    pub fn all_optional(&mut self, keys: &[&str]) -> &mut Self {
        self.rule(Rule::AllOf {
            keys: owned(keys),
            optional: true,
        })
    }

    pub fn at_least(&mut self, keys: &[&str]) -> &mut Self {
        self.rule(Rule::AtLeastOneOf { keys: owned(keys) })
    }

    /// Hide every item named `key`, including ones declared later.
    pub fn hide(&mut self, key: &str) -> &mut Self {
        self.set_visibility(key, Visibility::Hidden, "hide")
    }

    /// Show every item named `key`, including ones declared later.
    pub fn show(&mut self, key: &str) -> &mut Self {
        self.set_visibility(key, Visibility::Shown, "show")
    }

    /// Configure every trait named `key`: the ones declared so far, and each
    /// one declared later (before its own configuration runs).
    pub fn set(
        &mut self,
        key: &str,
        config: impl Fn(&mut TraitConfig<'_>) + 'static,
    ) -> &mut Self {
        if self.idle() {
            return self;
        }
        for item in self.items.iter_mut() {
            if let Item::Trait(spec) = item {
                if spec.key == key {
                    config(&mut TraitConfig::new(spec));
                }
            }
        }
        self.defaults.push((key.to_string(), Box::new(config)));
        self
    }

    /// Run `callback` at render time when the record has `gate`.
    pub fn upon(
        &mut self,
        gate: &str,
        callback: impl Fn(&mut TriggerContext<'_>) + Send + Sync + 'static,
    ) -> &mut Self {
        if !self.idle() {
            self.triggers.push(Trigger::new(gate, callback));
        }
        self
    }

    /// Apply a mixin. Mixins run before the style's own statements, at most
    /// once per style.
    pub fn inherit(&mut self, mixin: &Mixin) -> &mut Self {
        if self.collecting {
            if !self.mixins.iter().any(|m| m.name == mixin.name) {
                self.mixins.push(*mixin);
            }
            return self;
        }
        if self.error.is_some() || self.inherited.iter().any(|name| name == mixin.name) {
            return self;
        }
        self.inherited.push(mixin.name.to_string());
        (mixin.apply)(self);
        self
    }

    /// Finish the build.
    pub fn finish(self, title: impl Into<String>) -> Result<StyleSpec, CompileError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        for (key, (_, call)) in &self.visibility {
            if !self.items.iter().any(|item| item.key() == key) {
                return Err(CompileError::MissingTraitKey {
                    style: self.style.clone(),
                    key: key.clone(),
                    call: call.clone(),
                });
            }
        }

        let exempt: IndexSet<String> = self
            .rules
            .iter()
            .filter(|rule| rule.exempts_keys())
            .flat_map(|rule| rule.keys())
            .map(str::to_string)
            .collect();

        debug!(
            style = %self.style,
            items = self.items.len(),
            triggers = self.triggers.len(),
            rules = self.rules.len(),
            "compiled style"
        );

        Ok(StyleSpec {
            id: self.style,
            title: title.into(),
            items: self.items,
            triggers: self.triggers,
            rules: self.rules,
            exempt,
            inherited: self.inherited,
        })
    }

    fn declare_trait(
        &mut self,
        reference: &str,
        allow_duplicate: bool,
        config: impl FnOnce(&mut TraitConfig<'_>),
    ) -> &mut Self {
        if self.idle() {
            return self;
        }
        let parsed = match self.keys.parse(reference) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => {
                self.error = Some(CompileError::MalformedTraitReference {
                    style: self.style.clone(),
                    reference: reference.to_string(),
                });
                return self;
            }
            Err(e) => {
                self.error = Some(CompileError::KeyMatcher {
                    style: self.style.clone(),
                    message: e.to_string(),
                });
                return self;
            }
        };
        let exists = self
            .items
            .iter()
            .any(|item| matches!(item, Item::Trait(t) if t.key == parsed.key));
        if exists && !allow_duplicate {
            self.error = Some(CompileError::DuplicateTraitKey {
                style: self.style.clone(),
                key: parsed.key,
                reference: reference.to_string(),
            });
            return self;
        }

        let kind = self
            .keys
            .schema()
            .kind_of(&parsed.key)
            .map_or(TraitKind::Text, TraitKind::for_field);
        let mut spec = TraitSpec {
            visibility: self.pending_visibility(&parsed.key),
            key: parsed.key,
            prefix: parsed.prefix,
            suffix: parsed.suffix,
            kind,
            stub: None,
            markup: Default::default(),
            order: self.items.len(),
        };
        let key = spec.key.clone();
        {
            let mut cfg = TraitConfig::new(&mut spec);
            for (_, setup) in self.defaults.iter().filter(|(k, _)| *k == key) {
                setup(&mut cfg);
            }
            config(&mut cfg);
        }

        if self.implicitly_required.insert(key.clone()) {
            self.rules.push(Rule::Required { key });
        }
        self.items.push(Item::Trait(spec));
        self
    }

    fn rule(&mut self, rule: Rule) -> &mut Self {
        if !self.idle() {
            self.rules.push(rule);
        }
        self
    }

    fn set_visibility(&mut self, key: &str, visibility: Visibility, call: &str) -> &mut Self {
        if self.idle() {
            return self;
        }
        for item in self.items.iter_mut().filter(|item| item.key() == key) {
            item.set_visibility(visibility);
        }
        self.visibility
            .insert(key.to_string(), (visibility, format!("{}({})", call, key)));
        self
    }

    fn pending_visibility(&self, key: &str) -> Visibility {
        self.visibility
            .get(key)
            .map_or(Visibility::Default, |(visibility, _)| *visibility)
    }
}

fn owned(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}
