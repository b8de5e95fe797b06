//! NDJSON output: a header object followed by one object per registration.

use super::{Emitter, GENERATOR, Registration};
use crate::error::{CacheCfgError, Result};
use serde_json::json;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn header(&self, generated_at: &str) -> String {
        format!("{}\n", json!({"generator": GENERATOR, "date": generated_at}))
    }

    fn statement(&self, registration: &Registration) -> Result<String> {
        let line = serde_json::to_string(registration).map_err(|e| {
            CacheCfgError::Output(format!(
                "failed to serialize registration for '{}': {}",
                registration.action, e
            ))
        })?;
        Ok(format!("{}\n", line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Policy;
    use serde_json::Value;

    #[test]
    fn header_is_a_json_object() {
        let header = JsonEmitter.header("2024/01/02 03:04:05");
        let value: Value = serde_json::from_str(header.trim_end()).unwrap();

        assert_eq!(value["generator"], "cachecfg");
        assert_eq!(value["date"], "2024/01/02 03:04:05");
    }

    #[test]
    fn statement_keeps_field_order() {
        let registration = Registration {
            action: "index".to_string(),
            policy: Policy {
                enabled: true,
                with_layout: false,
                lifetime: 60,
                client_lifetime: 60,
                contextual: false,
                vary: vec!["Cookie".to_string()],
            },
        };

        let stmt = JsonEmitter.statement(&registration).unwrap();

        assert_eq!(
            stmt,
            "{\"action\":\"index\",\"enabled\":true,\"withLayout\":false,\"lifeTime\":60,\"clientLifeTime\":60,\"contextual\":false,\"vary\":[\"Cookie\"]}\n"
        );
    }
}
