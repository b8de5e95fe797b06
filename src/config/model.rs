//! Parsed and flattened configuration structures.

use super::types::PartialPolicy;
use std::path::PathBuf;

/// One parsed configuration file.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    /// Where the document was read from.
    pub path: PathBuf,

    /// Top-level mapping of the document (empty for an empty file).
    pub root: serde_yaml::Mapping,
}

/// The merged cache configuration.
///
/// Named actions keep the order in which they were first encountered across
/// the source documents. The reserved `all` section is held apart as
/// `defaults` and never appears in `actions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatConfig {
    /// Named action sections, in encounter order.
    pub actions: Vec<(String, PartialPolicy)>,

    /// The `all` section.
    pub defaults: PartialPolicy,
}

impl FlatConfig {
    /// Look up the configured section of a named action.
    pub fn action(&self, name: &str) -> Option<&PartialPolicy> {
        self.actions
            .iter()
            .find(|(action, _)| action == name)
            .map(|(_, policy)| policy)
    }

    /// Action names in encounter order.
    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|(name, _)| name.as_str())
    }
}
