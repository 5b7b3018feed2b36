/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A registry of compiled styles, grouped by source type.

use crate::error::ProcessorError;
use crate::processor::{render, RenderResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use styleguide_core::{compile_with_schema, Record, Schema, StyleDefinition, StyleSpec};
use tracing::debug;

/// Guide metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideConfig {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A registered style.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideEntry {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The kind of source the style formats, such as `Book`.
    pub source_type: String,
    #[serde(skip)]
    pub spec: StyleSpec,
}

/// Compiled styles keyed by id, in registration order.
#[derive(Debug, Clone, Default)]
pub struct StyleGuide {
    config: GuideConfig,
    schema: Schema,
    styles: IndexMap<String, GuideEntry>,
}

impl StyleGuide {
    pub fn new(config: GuideConfig) -> Self {
        Self {
            config,
            schema: Schema::default(),
            styles: IndexMap::new(),
        }
    }

    /// Compile later additions against `schema`.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GuideConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Compile and register `definitions` under `source_type`.
    ///
    /// Either every definition is registered or, on the first error, none is.
    pub fn add(
        &mut self,
        source_type: &str,
        definitions: impl IntoIterator<Item = StyleDefinition>,
    ) -> Result<&mut Self, ProcessorError> {
        let mut staged: IndexMap<String, GuideEntry> = IndexMap::new();
        for definition in definitions {
            if definition.id.trim().is_empty() {
                return Err(ProcessorError::MissingStyleId {
                    title: definition.title.clone(),
                });
            }
            if self.styles.contains_key(&definition.id) || staged.contains_key(&definition.id) {
                return Err(ProcessorError::DuplicateStyleId {
                    id: definition.id.clone(),
                    source_type: source_type.to_string(),
                });
            }
            let spec = compile_with_schema(&definition, &self.schema)?;
            staged.insert(
                definition.id.clone(),
                GuideEntry {
                    id: definition.id,
                    title: definition.title,
                    description: definition.description,
                    source_type: source_type.to_string(),
                    spec,
                },
            );
        }
        for (id, entry) in staged {
            debug!(guide = %self.config.id, style = %id, source_type, "registered style");
            self.styles.insert(id, entry);
        }
        Ok(self)
    }

    pub fn find(&self, id: &str) -> Result<&GuideEntry, ProcessorError> {
        self.styles
            .get(id)
            .ok_or_else(|| ProcessorError::UnknownStyle(id.to_string()))
    }

    /// Render `record` with the style `id`.
    pub fn run(&self, id: &str, record: &Record) -> Result<RenderResult, ProcessorError> {
        Ok(render(&self.find(id)?.spec, record))
    }

    pub fn entries(&self) -> impl Iterator<Item = &GuideEntry> {
        self.styles.values()
    }

    /// Entries registered under `source_type`.
    pub fn by_source_type<'a>(
        &'a self,
        source_type: &'a str,
    ) -> impl Iterator<Item = &'a GuideEntry> + 'a {
        self.entries().filter(move |e| e.source_type == source_type)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleguide_core::CompileError;

    fn title_style(id: &str) -> StyleDefinition {
        StyleDefinition::new(id, "Title only", |s| {
            s.add_trait("title");
        })
    }

    #[test]
    fn test_add_and_run() {
        let mut guide = StyleGuide::default();
        guide
            .add("Example", [title_style("A"), title_style("B")])
            .unwrap();
        assert_eq!(guide.len(), 2);
        let result = guide.run("B", &Record::new().with("title", "foo")).unwrap();
        assert_eq!(result.string, "foo");
    }

    #[test]
    fn test_duplicate_id_registers_nothing() {
        let mut guide = StyleGuide::default();
        let err = guide
            .add("Example", [title_style("A"), title_style("A")])
            .unwrap_err();
        assert!(matches!(
            err,
            ProcessorError::DuplicateStyleId { ref id, .. } if id == "A"
        ));
        assert!(guide.is_empty());
    }

    #[test]
    fn test_missing_id_and_title() {
        let mut guide = StyleGuide::default();
        let err = guide.add("Example", [title_style(" ")]).unwrap_err();
        assert!(matches!(err, ProcessorError::MissingStyleId { .. }));

        let untitled = StyleDefinition::new("C", "", |s| {
            s.add_trait("title");
        });
        let err = guide.add("Example", [untitled]).unwrap_err();
        assert!(matches!(
            err,
            ProcessorError::Compile(CompileError::MissingTitle { .. })
        ));
    }

    #[test]
    fn test_unknown_style() {
        let guide = StyleGuide::default();
        let err = guide.find("NOPE").unwrap_err();
        assert_eq!(err.to_string(), "style NOPE not found");
    }

    #[test]
    fn test_config_from_yaml() {
        let config: GuideConfig =
            serde_yaml::from_str("id: example\ntitle: Example Guide\nversion: 0.0.1\n").unwrap();
        assert_eq!(config.version.as_deref(), Some("0.0.1"));
        let guide = StyleGuide::new(config);
        assert_eq!(guide.config().title, "Example Guide");
    }
}
