//! PHP registration statements, evaluated by the cache manager at runtime.

use super::{Emitter, GENERATOR, Registration};
use crate::error::Result;

/// Emits `$this->addCache(...)` calls against `$moduleName`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpEmitter;

impl Emitter for PhpEmitter {
    fn header(&self, generated_at: &str) -> String {
        format!(
            "<?php\n// auto-generated by {}\n// date: {}\n",
            GENERATOR, generated_at
        )
    }

    fn statement(&self, registration: &Registration) -> Result<String> {
        let policy = &registration.policy;
        Ok(format!(
            "$this->addCache($moduleName, {}, array('withLayout' => {}, 'lifeTime' => {}, 'clientLifeTime' => {}, 'contextual' => {}, 'vary' => {}));\n",
            php_string(&registration.action),
            policy.with_layout,
            policy.lifetime,
            policy.client_lifetime,
            policy.contextual,
            php_list(&policy.vary),
        ))
    }

    fn trailer(&self) -> &'static str {
        "\n"
    }
}

/// Single-quoted PHP string literal.
fn php_string(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// A list exported as a PHP array literal, flattened onto one line.
fn php_list(values: &[String]) -> String {
    let mut out = String::from("array (");
    for (i, value) in values.iter().enumerate() {
        out.push_str(&format!("  {} => {},", i, php_string(value)));
    }
    out.push(')');
    out.replace('\n', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Policy;

    fn registration(action: &str, policy: Policy) -> Registration {
        Registration {
            action: action.to_string(),
            policy,
        }
    }

    #[test]
    fn header_records_generator_and_date() {
        let header = PhpEmitter.header("2024/01/02 03:04:05");
        assert_eq!(
            header,
            "<?php\n// auto-generated by cachecfg\n// date: 2024/01/02 03:04:05\n"
        );
    }

    #[test]
    fn statement_for_default_policy() {
        let stmt = PhpEmitter
            .statement(&registration("DEFAULT", Policy::default()))
            .unwrap();
        assert_eq!(
            stmt,
            "$this->addCache($moduleName, 'DEFAULT', array('withLayout' => false, 'lifeTime' => 0, 'clientLifeTime' => 0, 'contextual' => false, 'vary' => array ()));\n"
        );
    }

    #[test]
    fn statement_with_vary_list() {
        let policy = Policy {
            enabled: true,
            with_layout: true,
            lifetime: 60,
            client_lifetime: 30,
            contextual: true,
            vary: vec!["Cookie".to_string(), "Accept-Language".to_string()],
        };
        let stmt = PhpEmitter.statement(&registration("index", policy)).unwrap();
        assert_eq!(
            stmt,
            "$this->addCache($moduleName, 'index', array('withLayout' => true, 'lifeTime' => 60, 'clientLifeTime' => 30, 'contextual' => true, 'vary' => array (  0 => 'Cookie',  1 => 'Accept-Language',)));\n"
        );
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(php_string("it's"), r"'it\'s'");
        assert_eq!(php_string(r"a\b"), r"'a\\b'");
    }

    #[test]
    fn newlines_are_dropped_from_lists() {
        assert_eq!(php_list(&["X-\nFoo".to_string()]), "array (  0 => 'X-Foo',)");
    }
}
