//! Implementation of the `cachecfg compile` command.

use crate::cli::CompileArgs;
use crate::compiler::{CacheConfigCompiler, GeneratedSource};
use crate::error::{CacheCfgError, Result};
use crate::fs::atomic_write_file;
use std::io::Write;

/// Execute the `cachecfg compile` command.
///
/// Compiles all files into one artifact and either prints it or writes it
/// atomically to `--output`. On error nothing is written.
pub fn cmd_compile(args: CompileArgs) -> Result<()> {
    let source = compile_source(&args)?;
    let text = source.text();

    match &args.output {
        Some(path) => {
            atomic_write_file(path, &text)?;
            tracing::info!(
                path = %path.display(),
                generated_at = %source.generated_at,
                "cache artifact written"
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| CacheCfgError::Output(format!("failed to write to stdout: {}", e)))?;
        }
    }

    Ok(())
}

fn compile_source(args: &CompileArgs) -> Result<GeneratedSource> {
    CacheConfigCompiler::with_emitter(args.format.emitter()).compile(&args.files)
}
