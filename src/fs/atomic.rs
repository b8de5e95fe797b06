//! Atomic writes of generated cache artifacts.
//!
//! The artifact is written to `.{filename}.tmp` next to the target, synced, and
//! renamed over the target. A reader that loads the artifact concurrently sees
//! either the previous version or the new one, never a truncated file.
//!
//! Source and destination must be on the same filesystem for the rename to be
//! atomic, which holds because the temp file lives in the target's directory.

use crate::error::{CacheCfgError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write `content` to `path`, creating parent directories.
///
/// # Returns
///
/// * `Ok(())` - The artifact is in place
/// * `Err(CacheCfgError::Output)` - Directory creation, write, sync or rename failed
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            CacheCfgError::Output(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CacheCfgError::Output(format!("failed to replace '{}': {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote cache artifact");
    Ok(())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            CacheCfgError::Output(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        CacheCfgError::Output(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            CacheCfgError::Output(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_new_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config_cache.yml.php");

        atomic_write_file(&file_path, "<?php\n").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "<?php\n");
    }

    #[test]
    fn test_replaces_existing_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("cache.php");
        fs::write(&file_path, "stale").unwrap();

        atomic_write_file(&file_path, "fresh").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "fresh");
    }

    #[test]
    fn test_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("cache").join("modules").join("cache.php");

        atomic_write_file(&file_path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "nested");
    }

    #[test]
    fn test_temp_file_is_gone_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("cache.php");

        atomic_write_file(&file_path, "content").unwrap();

        assert!(!temp_dir.path().join(".cache.php.tmp").exists());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/var/cache/app/cache.php")).unwrap();
        assert_eq!(temp, Path::new("/var/cache/app/.cache.php.tmp"));
    }

    #[test]
    fn test_directory_target_is_output_error() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("taken");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("inside"), "x").unwrap();

        let err = atomic_write_file(&target, "content").unwrap_err();

        assert!(matches!(err, CacheCfgError::Output(_)));
    }
}
