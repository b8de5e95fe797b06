//! Config loading and flattening operations.

use super::merge::merge_documents;
use super::model::{ConfigDocument, FlatConfig};
use super::types::{ALL_SECTION, PartialPolicy};
use crate::error::{CacheCfgError, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Read, merge and type the given configuration files.
///
/// # Arguments
///
/// * `paths` - Configuration files, lowest precedence first
///
/// # Returns
///
/// * `Ok(FlatConfig)` - The merged configuration
/// * `Err(CacheCfgError::Configuration)` - A file is missing or unreadable
/// * `Err(CacheCfgError::Parse)` - A file is not a valid cache document
/// * `Err(CacheCfgError::Initialization)` - A cache key has the wrong type
pub fn get_configuration<P: AsRef<Path>>(paths: &[P]) -> Result<FlatConfig> {
    let documents = parse_yamls(paths)?;
    let merged = merge_documents(documents);
    FlatConfig::from_mapping(merged)
}

/// Parse every file in order.
pub fn parse_yamls<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ConfigDocument>> {
    paths.iter().map(|p| parse_yaml(p.as_ref())).collect()
}

/// Parse a single configuration file.
pub fn parse_yaml(path: &Path) -> Result<ConfigDocument> {
    let content = std::fs::read(path).map_err(|e| {
        CacheCfgError::Configuration(format!(
            "configuration file '{}' does not exist or is not readable: {}",
            path.display(),
            e
        ))
    })?;

    let root = parse_yaml_bytes(&content).map_err(|msg| {
        CacheCfgError::Parse(format!(
            "configuration file '{}' is improperly formatted: {}",
            path.display(),
            msg
        ))
    })?;

    tracing::debug!(path = %path.display(), sections = root.len(), "parsed cache configuration");

    Ok(ConfigDocument {
        path: path.to_path_buf(),
        root,
    })
}

/// Parse document bytes into its top-level mapping.
///
/// Invalid UTF-8 is a parse failure like any other malformed content. Merge
/// keys (`<<: *anchor`) are expanded. An empty document yields an empty
/// mapping.
fn parse_yaml_bytes(content: &[u8]) -> std::result::Result<Mapping, String> {
    let mut value: Value = serde_yaml::from_slice(content).map_err(|e| e.to_string())?;
    value.apply_merge().map_err(|e| e.to_string())?;
    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(root) => Ok(root),
        other => Err(format!(
            "expected a mapping of action names, found {}",
            describe(&other)
        )),
    }
}

impl FlatConfig {
    /// Build the typed configuration from a merged top-level mapping.
    pub fn from_mapping(mapping: Mapping) -> Result<Self> {
        let mut config = FlatConfig::default();

        for (key, body) in mapping {
            let name = section_name(key)?;
            let policy = section_policy(&name, body)?;

            for unknown in policy.extra.keys() {
                tracing::warn!(action = %name, key = %unknown, "ignoring unknown cache setting");
            }

            if name == ALL_SECTION {
                config.defaults = policy;
            } else {
                config.actions.push((name, policy));
            }
        }

        tracing::debug!(actions = config.actions.len(), "flattened cache configuration");
        Ok(config)
    }
}

fn section_name(key: Value) -> Result<String> {
    match key {
        Value::String(name) => Ok(name),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(CacheCfgError::Parse(format!(
            "action names must be strings, found {}",
            describe(&other)
        ))),
    }
}

fn section_policy(name: &str, body: Value) -> Result<PartialPolicy> {
    match body {
        Value::Null => Ok(PartialPolicy::default()),
        Value::Mapping(_) => serde_yaml::from_value(body).map_err(|e| {
            CacheCfgError::Initialization(format!("action '{}': {}", name, e))
        }),
        other => Err(CacheCfgError::Initialization(format!(
            "action '{}': expected a mapping of cache settings, found {}",
            name,
            describe(&other)
        ))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
