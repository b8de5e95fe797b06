//! Target-syntax emitters for resolved cache policies.
//!
//! An emitter turns one [`Registration`] into one statement of the generated
//! artifact and supplies the header that records when it was generated.

mod json;
mod php;

pub use json::JsonEmitter;
pub use php::PhpEmitter;

use crate::error::Result;
use crate::policy::Policy;
use serde::Serialize;

/// Name recorded in generated headers.
pub const GENERATOR: &str = env!("CARGO_PKG_NAME");

/// One action's policy, ready to be registered with the cache manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub action: String,
    #[serde(flatten)]
    pub policy: Policy,
}

/// Serializes registrations into a target syntax.
pub trait Emitter {
    /// Leading lines of the artifact, including the generation timestamp.
    fn header(&self, generated_at: &str) -> String;

    /// A single registration statement, newline-terminated.
    fn statement(&self, registration: &Registration) -> Result<String>;

    /// Text appended after the last statement.
    fn trailer(&self) -> &'static str {
        ""
    }
}
