//! Cache configuration types.
//!
//! This module defines the partially-specified policy read from a single
//! action section of `cache.yml`, and the reserved section names.

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Section whose values apply beneath every named action.
pub const ALL_SECTION: &str = "all";

/// Pseudo-action emitted last, carrying the fallback policy.
pub const DEFAULT_ACTION: &str = "DEFAULT";

/// The cache settings of one section, exactly as configured.
///
/// Every field is optional; absent and `null` values are both `None` and fall
/// back to the `all` section during resolution.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartialPolicy {
    /// Whether caching is switched on for the action.
    #[serde(deserialize_with = "yaml11_bool")]
    pub enabled: Option<bool>,

    /// Cache the page with its layout.
    #[serde(deserialize_with = "yaml11_bool")]
    pub with_layout: Option<bool>,

    /// Server-side lifetime in seconds.
    pub lifetime: Option<u64>,

    /// Client-side (HTTP) lifetime in seconds.
    pub client_lifetime: Option<u64>,

    /// Cache the fragment per calling context.
    #[serde(deserialize_with = "yaml11_bool")]
    pub contextual: Option<bool>,

    /// Request headers the cached response varies on.
    pub vary: Option<Vary>,

    /// Unknown keys, kept so they can be reported.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl PartialPolicy {
    /// Returns true if no recognized key is set.
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none()
            && self.with_layout.is_none()
            && self.lifetime.is_none()
            && self.client_lifetime.is_none()
            && self.contextual.is_none()
            && self.vary.is_none()
    }
}

/// A `vary` value: either a single header name or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Vary {
    One(String),
    Many(Vec<String>),
}

impl Vary {
    /// Normalize to a list of header names.
    pub fn to_headers(&self) -> Vec<String> {
        match self {
            Vary::One(header) => vec![header.clone()],
            Vary::Many(headers) => headers.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseBool {
    Bool(bool),
    Word(String),
}

/// Accept YAML 1.1 boolean words (`on`/`off`, `yes`/`no`, `y`/`n`) as well as
/// plain booleans. Matching is case-insensitive.
fn yaml11_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LooseBool>::deserialize(deserializer)? {
        None => Ok(None),
        Some(LooseBool::Bool(value)) => Ok(Some(value)),
        Some(LooseBool::Word(word)) => match word.to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "y" => Ok(Some(true)),
            "false" | "off" | "no" | "n" => Ok(Some(false)),
            _ => Err(D::Error::invalid_value(
                Unexpected::Str(&word),
                &"a boolean (true/false, on/off, yes/no)",
            )),
        },
    }
}
