use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding `cache.yml` fixtures.
pub(crate) struct ConfigFixture {
    dir: TempDir,
}

impl ConfigFixture {
    pub(crate) fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write `content` to `name` inside the fixture directory.
    pub(crate) fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Path of `name` inside the fixture directory, whether or not it exists.
    pub(crate) fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Write a single fixture and return it together with its path list.
pub(crate) fn single_config(content: &str) -> (ConfigFixture, Vec<PathBuf>) {
    let fixture = ConfigFixture::new();
    let path = fixture.write("cache.yml", content);
    (fixture, vec![path])
}
