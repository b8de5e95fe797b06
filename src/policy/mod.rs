//! Resolved cache policies.
//!
//! A [`Policy`] is what the cache manager receives for one action: every field
//! is populated, falling back from the action's own section to the `all`
//! section to a fixed default.


use crate::config::PartialPolicy;
use serde::Serialize;

/// The fully-resolved cache policy of one action.
///
/// `lifetime` and `client_lifetime` are always 0 when `enabled` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Policy {
    pub enabled: bool,
    #[serde(rename = "withLayout")]
    pub with_layout: bool,
    #[serde(rename = "lifeTime")]
    pub lifetime: u64,
    #[serde(rename = "clientLifeTime")]
    pub client_lifetime: u64,
    pub contextual: bool,
    pub vary: Vec<String>,
}

/// Resolve an action's section against the `all` defaults.
pub fn resolve(action: &PartialPolicy, defaults: &PartialPolicy) -> Policy {
    let enabled = action.enabled.or(defaults.enabled).unwrap_or(false);
    let with_layout = action.with_layout.or(defaults.with_layout).unwrap_or(false);
    let contextual = action.contextual.or(defaults.contextual).unwrap_or(false);
    let vary = action
        .vary
        .as_ref()
        .or(defaults.vary.as_ref())
        .map(|v| v.to_headers())
        .unwrap_or_default();

    let (lifetime, client_lifetime) = if enabled {
        let lifetime = action.lifetime.or(defaults.lifetime).unwrap_or(0);
        let client_lifetime = action
            .client_lifetime
            .or(defaults.client_lifetime)
            .unwrap_or(lifetime);
        (lifetime, client_lifetime)
    } else {
        (0, 0)
    };

    Policy {
        enabled,
        with_layout,
        lifetime,
        client_lifetime,
        contextual,
        vary,
    }
}

/// Resolve the fallback policy used when no action-specific entry exists.
pub fn resolve_default(defaults: &PartialPolicy) -> Policy {
    resolve(&PartialPolicy::default(), defaults)
}
