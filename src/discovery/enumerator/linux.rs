use crate::discovery::env::{
    ASDF_DATA_DIR, JAVA_HOME, PATH, SDKMAN_DIR, SNAP, ScanEnv, XDG_DATA_HOME,
};
use crate::discovery::scan::{push_runtime_layouts, subdirectories, subdirectories_named};
use log::trace;
use std::path::{Path, PathBuf};

const JAVA: &str = "java";

/// Distribution package roots, scanned together with their snap mirror.
const PACKAGE_ROOTS: [&str; 4] = ["/usr/java", "/usr/lib/jvm", "/usr/lib64/jvm", "/usr/lib32/jvm"];

/// Manually installed and sandbox runtime roots.
const MANUAL_ROOTS: [&str; 4] = ["/opt/jdk", "/opt/jdks", "/opt/ibm", "/app/jdk"];

/// Gentoo installs `openjdk-*`/`openj9-*` directly under these.
const GENTOO_ROOTS: [&str; 3] = ["/usr/lib64", "/usr/lib", "/opt"];

const AOSC_ROOT: &str = "/usr/lib";

pub(super) fn candidates(env: &ScanEnv) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env.var(PATH) {
        match which::which_in(JAVA, Some(path), env.root()) {
            Ok(java) => candidates.push(java),
            Err(e) => trace!("No java resolvable on PATH: {e}"),
        }
    }

    for root in PACKAGE_ROOTS {
        scan_with_snap_mirror(&mut candidates, env, root);
    }

    for root in GENTOO_ROOTS {
        let subdirs = subdirectories_named(&env.rooted(root), |name| {
            name.starts_with("openjdk-") || name.starts_with("openj9-")
        });
        push_runtime_layouts(&mut candidates, subdirs, JAVA);
    }

    let subdirs = subdirectories_named(&env.rooted(AOSC_ROOT), |name| {
        name == "java" || name.starts_with("java-")
    });
    push_runtime_layouts(&mut candidates, subdirs, JAVA);

    if let Some(data_home) = env.dir_or_home_default(XDG_DATA_HOME, ".local/share") {
        scan_dir(&mut candidates, &data_home.join("PrismLauncher").join("java"));
    }

    for dir in env.extra_dirs() {
        scan_dir(&mut candidates, dir);
    }

    for root in MANUAL_ROOTS {
        scan_with_snap_mirror(&mut candidates, env, root);
    }

    if let Some(java_home) = env.var_path(JAVA_HOME) {
        candidates.push(java_home.join("bin").join(JAVA));
        candidates.push(java_home.join("jre").join("bin").join(JAVA));
    }

    for dir in env.path_dirs() {
        let java = dir.join(JAVA);
        if java.is_file() {
            candidates.push(java);
        }
    }

    for (var, default, installs) in [
        (SDKMAN_DIR, ".sdkman", "candidates/java"),
        (ASDF_DATA_DIR, ".asdf", "installs/java"),
    ] {
        if let Some(manager_dir) = env.dir_or_home_default(var, default) {
            for version_dir in subdirectories(&manager_dir.join(installs)) {
                candidates.push(version_dir.join("bin").join(JAVA));
            }
        }
    }

    candidates
}

fn scan_dir(candidates: &mut Vec<PathBuf>, dir: &Path) {
    push_runtime_layouts(candidates, subdirectories(dir), JAVA);
}

fn scan_with_snap_mirror(candidates: &mut Vec<PathBuf>, env: &ScanEnv, root: &str) {
    scan_dir(candidates, &env.rooted(root));
    if let Some(snap) = env.var_path(SNAP) {
        scan_dir(candidates, &snap.join(root.trim_start_matches('/')));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::env::HOME;
    use std::fs;
    use tempfile::TempDir;

    fn mkdirs(root: &Path, dirs: &[&str]) {
        for dir in dirs {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    #[test]
    fn test_package_roots_emit_both_layouts() {
        let temp_dir = TempDir::new().unwrap();
        mkdirs(temp_dir.path(), &["usr/lib/jvm/java-17-openjdk"]);
        let env = ScanEnv::new(temp_dir.path());

        let found = candidates(&env);
        let jdk = temp_dir.path().join("usr/lib/jvm/java-17-openjdk");
        assert!(found.contains(&jdk.join("bin/java")));
        assert!(found.contains(&jdk.join("jre/bin/java")));
    }

    #[test]
    fn test_snap_mirror() {
        let temp_dir = TempDir::new().unwrap();
        let snap = temp_dir.path().join("snap/app/42");
        mkdirs(&snap, &["usr/lib/jvm/jdk-21", "opt/jdks/zulu-11"]);
        let env = ScanEnv::new(temp_dir.path()).with_var(SNAP, snap.as_os_str());

        let found = candidates(&env);
        assert!(found.contains(&snap.join("usr/lib/jvm/jdk-21/bin/java")));
        assert!(found.contains(&snap.join("opt/jdks/zulu-11/bin/java")));
    }

    #[test]
    fn test_gentoo_and_aosc_filters() {
        let temp_dir = TempDir::new().unwrap();
        mkdirs(
            temp_dir.path(),
            &[
                "usr/lib64/openjdk-17",
                "opt/openj9-11",
                "opt/firefox",
                "usr/lib/java",
                "usr/lib/java-21",
                "usr/lib/javascript",
                "usr/lib/python3",
            ],
        );
        let env = ScanEnv::new(temp_dir.path());

        let found = candidates(&env);
        let root = temp_dir.path();
        assert!(found.contains(&root.join("usr/lib64/openjdk-17/bin/java")));
        assert!(found.contains(&root.join("opt/openj9-11/bin/java")));
        assert!(found.contains(&root.join("usr/lib/java/bin/java")));
        assert!(found.contains(&root.join("usr/lib/java-21/bin/java")));
        assert!(!found.iter().any(|path| path.starts_with(root.join("opt/firefox"))));
        assert!(!found.iter().any(|path| path.starts_with(root.join("usr/lib/javascript"))));
        assert!(!found.iter().any(|path| path.starts_with(root.join("usr/lib/python3"))));
    }

    #[test]
    fn test_prism_launcher_dir_from_home_and_xdg() {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path().join("home/dev");
        mkdirs(&home, &[".local/share/PrismLauncher/java/java-runtime-gamma"]);
        let env = ScanEnv::new(temp_dir.path()).with_var(HOME, home.as_os_str());

        let found = candidates(&env);
        assert!(found.contains(
            &home.join(".local/share/PrismLauncher/java/java-runtime-gamma/bin/java")
        ));

        let xdg = temp_dir.path().join("xdg");
        mkdirs(&xdg, &["PrismLauncher/java/jre-legacy"]);
        let found = candidates(&env.with_var(XDG_DATA_HOME, xdg.as_os_str()));
        assert!(found.contains(&xdg.join("PrismLauncher/java/jre-legacy/bin/java")));
    }

    #[test]
    fn test_java_home_and_version_managers() {
        let temp_dir = TempDir::new().unwrap();
        let home = temp_dir.path().join("home");
        mkdirs(
            &home,
            &[".sdkman/candidates/java/21.0.5-tem", ".asdf/installs/java/zulu-17"],
        );
        let env = ScanEnv::new(temp_dir.path())
            .with_var(HOME, home.as_os_str())
            .with_var(JAVA_HOME, "/srv/jdk");

        let found = candidates(&env);
        assert!(found.contains(&PathBuf::from("/srv/jdk/bin/java")));
        assert!(found.contains(&PathBuf::from("/srv/jdk/jre/bin/java")));
        assert!(found.contains(&home.join(".sdkman/candidates/java/21.0.5-tem/bin/java")));
        assert!(found.contains(&home.join(".asdf/installs/java/zulu-17/bin/java")));
    }

    #[test]
    fn test_extra_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let extra = temp_dir.path().join("runtimes");
        mkdirs(&extra, &["jdk-8"]);
        let env = ScanEnv::new(temp_dir.path()).with_extra_dirs([extra.clone()]);

        assert!(candidates(&env).contains(&extra.join("jdk-8/bin/java")));
    }

    #[test]
    fn test_path_dirs_only_existing_files() {
        let temp_dir = TempDir::new().unwrap();
        let with_java = temp_dir.path().join("a");
        let dir_named_java = temp_dir.path().join("b");
        mkdirs(temp_dir.path(), &["a", "b/java"]);
        fs::write(with_java.join("java"), "").unwrap();

        let path = std::env::join_paths([&with_java, &dir_named_java]).unwrap();
        let env = ScanEnv::new(temp_dir.path()).with_var(PATH, path);

        let found = candidates(&env);
        assert!(found.contains(&with_java.join("java")));
        assert!(!found.contains(&dir_named_java.join("java")));
    }

    #[test]
    fn test_missing_everything_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(candidates(&ScanEnv::new(temp_dir.path())).is_empty());
    }
}
