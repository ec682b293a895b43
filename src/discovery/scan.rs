//! Directory scanning helpers shared by the per-OS enumerators.
//!
//! Every helper treats a missing or unreadable directory as empty.

use log::trace;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Immediate subdirectories of `dir`, sorted by name.
pub fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                trace!("Skipping unreadable entry under {}: {e}", dir.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect()
}

/// Subdirectories of `dir` whose file name satisfies `filter`.
pub fn subdirectories_named(dir: &Path, filter: impl Fn(&str) -> bool) -> Vec<PathBuf> {
    subdirectories(dir)
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(&filter)
        })
        .collect()
}

/// Append `<sub>/bin/<exe>` and `<sub>/jre/bin/<exe>` for every subdirectory.
///
/// Candidates are added whether or not they exist.
pub fn push_runtime_layouts(candidates: &mut Vec<PathBuf>, subdirs: Vec<PathBuf>, exe: &str) {
    for dir in subdirs {
        candidates.push(dir.join("bin").join(exe));
        candidates.push(dir.join("jre").join("bin").join(exe));
    }
}

/// Existing paths matching the pattern `<dir>/*/<suffix>`.
pub fn glob_children(dir: &Path, suffix: &str) -> Vec<PathBuf> {
    subdirectories(dir)
        .into_iter()
        .map(|sub| sub.join(suffix))
        .filter(|path| path.exists())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_subdirectories_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(subdirectories(&temp_dir.path().join("missing")).is_empty());
    }

    #[test]
    fn test_subdirectories_ignores_files_and_sorts() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("zulu-17")).unwrap();
        fs::create_dir(temp_dir.path().join("temurin-21")).unwrap();
        fs::write(temp_dir.path().join("README"), "x").unwrap();

        let dirs = subdirectories(temp_dir.path());
        assert_eq!(
            dirs,
            vec![
                temp_dir.path().join("temurin-21"),
                temp_dir.path().join("zulu-17")
            ]
        );
    }

    #[test]
    fn test_subdirectories_named() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["openjdk-17", "openj9-11", "python3", "java-21"] {
            fs::create_dir(temp_dir.path().join(name)).unwrap();
        }

        let dirs = subdirectories_named(temp_dir.path(), |name| {
            name.starts_with("openjdk-") || name.starts_with("openj9-")
        });
        assert_eq!(
            dirs,
            vec![
                temp_dir.path().join("openj9-11"),
                temp_dir.path().join("openjdk-17")
            ]
        );
    }

    #[test]
    fn test_push_runtime_layouts() {
        let mut candidates = Vec::new();
        push_runtime_layouts(&mut candidates, vec![PathBuf::from("/usr/lib/jvm/jdk")], "java");
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/usr/lib/jvm/jdk/bin/java"),
                PathBuf::from("/usr/lib/jvm/jdk/jre/bin/java")
            ]
        );
    }

    #[test]
    fn test_glob_children_only_existing() {
        let temp_dir = TempDir::new().unwrap();
        let with_java = temp_dir.path().join("jdk-21.jdk/Contents/Home/bin");
        fs::create_dir_all(&with_java).unwrap();
        fs::write(with_java.join("java"), "").unwrap();
        fs::create_dir_all(temp_dir.path().join("broken.jdk/Contents")).unwrap();

        let found = glob_children(temp_dir.path(), "Contents/Home/bin/java");
        assert_eq!(found, vec![with_java.join("java")]);
    }
}
