/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use styleguide_core::{Record, Schema};

use crate::guide::GuideConfig;
use crate::ProcessorError;

/// Load records from a JSON or YAML file.
///
/// The file may hold a single record or a list of records. Files without a
/// `.json` extension are read as YAML.
pub fn load_records(path: &Path) -> Result<Vec<Record>, ProcessorError> {
    let bytes = fs::read(path)?;
    match extension(path) {
        "json" => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(&bytes)?;

            if let Ok(records) = serde_json::from_slice::<Vec<Record>>(&bytes) {
                return Ok(records);
            }
            Ok(vec![serde_json::from_slice::<Record>(&bytes)?])
        }
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            let _: serde_yaml::Value = serde_yaml::from_str(&content)?;

            if let Ok(records) = serde_yaml::from_str::<Vec<Record>>(&content) {
                return Ok(records);
            }
            Ok(vec![serde_yaml::from_str::<Record>(&content)?])
        }
    }
}

/// Load guide metadata from a JSON or YAML file.
pub fn load_guide_config(path: &Path) -> Result<GuideConfig, ProcessorError> {
    load_document(path)
}

/// Load a field schema (key to kind) from a JSON or YAML file.
pub fn load_schema(path: &Path) -> Result<Schema, ProcessorError> {
    load_document(path)
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, ProcessorError> {
    let bytes = fs::read(path)?;
    match extension(path) {
        "json" => Ok(serde_json::from_slice(&bytes)?),
        _ => Ok(serde_yaml::from_slice(&bytes)?),
    }
}

fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("yaml")
}
