use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated jartender home for running the binary.
///
/// The directory is removed when the guard is dropped.
pub struct TestHomeGuard {
    dir: TempDir,
}

impl TestHomeGuard {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create test home directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn jartender_home(&self) -> PathBuf {
        self.dir.path().join(".jartender")
    }

    /// Write `contents` as the home's `config.toml`.
    pub fn write_config(&self, contents: &str) -> &Self {
        let home = self.jartender_home();
        fs::create_dir_all(&home).expect("Failed to create .jartender directory");
        fs::write(home.join("config.toml"), contents).expect("Failed to write config.toml");
        self
    }
}

impl Default for TestHomeGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_and_cleans_up_directory() {
        let test_path = {
            let guard = TestHomeGuard::new();
            let path = guard.path().to_path_buf();
            assert!(path.exists());
            path
        };
        assert!(!test_path.exists());
    }

    #[test]
    fn test_write_config() {
        let guard = TestHomeGuard::new();
        guard.write_config("[discovery]\njobs = 2\n");
        assert!(guard.jartender_home().join("config.toml").exists());
    }
}
