//! Cache policy compiler.
//!
//! Turns the merged `cache.yml` configuration into one registration statement
//! per action, in encounter order, followed by the `DEFAULT` statement. The
//! result is returned as text; writing it anywhere is up to the caller.
//!
//! ```no_run
//! use cachecfg::compiler::CacheConfigCompiler;
//!
//! let source = CacheConfigCompiler::new().compile(&["config/cache.yml"])?;
//! print!("{}", source.text());
//! # Ok::<(), cachecfg::error::CacheCfgError>(())
//! ```

pub mod emit;


use crate::config::{DEFAULT_ACTION, FlatConfig, get_configuration};
use crate::error::Result;
use crate::policy::{resolve, resolve_default};
use chrono::{Local, NaiveDateTime};
use clap::ValueEnum;
use emit::{Emitter, JsonEmitter, PhpEmitter, Registration};
use std::path::Path;

/// Format of the timestamp recorded in the generated header.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Target syntax of the generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// PHP `addCache` statements (default).
    #[default]
    Php,
    /// Newline-delimited JSON objects.
    Json,
}

impl OutputFormat {
    pub fn emitter(self) -> Box<dyn Emitter> {
        match self {
            OutputFormat::Php => Box::new(PhpEmitter),
            OutputFormat::Json => Box::new(JsonEmitter),
        }
    }
}

/// The compiled artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    /// When the artifact was generated.
    pub generated_at: NaiveDateTime,

    /// Header lines, including the formatted timestamp.
    pub header: String,

    /// Registration statements. Independent of the timestamp.
    pub body: String,

    trailer: &'static str,
}

impl GeneratedSource {
    /// The full artifact text.
    pub fn text(&self) -> String {
        format!("{}{}{}", self.header, self.body, self.trailer)
    }
}

/// Compiles cache configuration files into registration code.
pub struct CacheConfigCompiler {
    emitter: Box<dyn Emitter>,
}

impl Default for CacheConfigCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheConfigCompiler {
    /// A compiler emitting PHP.
    pub fn new() -> Self {
        Self::with_emitter(Box::new(PhpEmitter))
    }

    pub fn with_emitter(emitter: Box<dyn Emitter>) -> Self {
        Self { emitter }
    }

    /// Compile the given files, stamping the artifact with the local time.
    ///
    /// # Arguments
    ///
    /// * `config_files` - Configuration files, lowest precedence first
    ///
    /// # Returns
    ///
    /// * `Ok(GeneratedSource)` - The compiled artifact
    /// * `Err(CacheCfgError)` - Any configuration, parse or initialization
    ///   failure; nothing is produced in that case
    pub fn compile<P: AsRef<Path>>(&self, config_files: &[P]) -> Result<GeneratedSource> {
        self.compile_at(config_files, Local::now().naive_local())
    }

    /// Compile the given files with an explicit generation timestamp.
    pub fn compile_at<P: AsRef<Path>>(
        &self,
        config_files: &[P],
        generated_at: NaiveDateTime,
    ) -> Result<GeneratedSource> {
        let config = get_configuration(config_files)?;
        self.compile_config(&config, generated_at)
    }

    /// Compile an already-flattened configuration.
    pub fn compile_config(
        &self,
        config: &FlatConfig,
        generated_at: NaiveDateTime,
    ) -> Result<GeneratedSource> {
        let mut body = String::new();
        for registration in registrations(config) {
            body.push_str(&self.emitter.statement(&registration)?);
        }

        let header = self
            .emitter
            .header(&generated_at.format(TIMESTAMP_FORMAT).to_string());

        tracing::info!(
            actions = config.actions.len(),
            generated_at = %generated_at,
            "compiled cache configuration"
        );

        Ok(GeneratedSource {
            generated_at,
            header,
            body,
            trailer: self.emitter.trailer(),
        })
    }
}

/// Resolve every named action, then the `DEFAULT` pseudo-action.
pub fn registrations(config: &FlatConfig) -> Vec<Registration> {
    let mut registrations: Vec<Registration> = config
        .actions
        .iter()
        .map(|(action, section)| Registration {
            action: action.clone(),
            policy: resolve(section, &config.defaults),
        })
        .collect();

    registrations.push(Registration {
        action: DEFAULT_ACTION.to_string(),
        policy: resolve_default(&config.defaults),
    });

    registrations
}
