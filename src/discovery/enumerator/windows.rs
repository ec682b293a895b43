use crate::discovery::env::{APPDATA, JAVA_HOME, PROGRAM_FILES, PROGRAM_FILES_X86, ScanEnv};
use crate::discovery::registry::{RegistryScanner, RegistrySource};
use crate::discovery::scan::subdirectories;
use std::path::{Path, PathBuf};

const JAVA_EXE: &str = "java.exe";

const DEFAULT_PROGRAM_FILES: &str = r"C:\Program Files";
const DEFAULT_PROGRAM_FILES_X86: &str = r"C:\Program Files (x86)";

/// Default JRE install directories of the Oracle 6/7/8 installers.
const LEGACY_JRES: [&str; 3] = ["jre8", "jre7", "jre6"];

/// Directories a JDK or JRE install root is expected to contain.
const LAYOUT_DIRS: [&str; 4] = ["bin", "include", "jre", "lib"];

pub(super) fn candidates(env: &ScanEnv, registry: &dyn RegistrySource) -> Vec<PathBuf> {
    let mut candidates = RegistryScanner::new(registry).scan();

    let java_roots = program_files_trees(env)
        .into_iter()
        .map(|tree| tree.join("Java"))
        .collect::<Vec<_>>();

    for java_root in &java_roots {
        for install in subdirectories(java_root) {
            if looks_like_runtime(&install) {
                let java = install.join("bin").join(JAVA_EXE);
                if java.exists() {
                    candidates.push(java);
                }
            }
        }
    }

    for java_root in &java_roots {
        for jre in LEGACY_JRES {
            candidates.push(java_root.join(jre).join("bin").join(JAVA_EXE));
        }
    }

    if let Some(appdata) = env.var_path(APPDATA) {
        let prism = appdata.join("PrismLauncher").join("java");
        for runtime in subdirectories(&prism) {
            let java = runtime.join("bin").join(JAVA_EXE);
            if java.exists() {
                candidates.push(java);
            }
        }
    }

    for dir in env.extra_dirs() {
        for runtime in subdirectories(dir) {
            candidates.push(runtime.join("bin").join(JAVA_EXE));
        }
    }

    if let Some(java_home) = env.var_path(JAVA_HOME) {
        candidates.push(java_home.join("bin").join(JAVA_EXE));
    }

    for dir in env.path_dirs() {
        let java = dir.join(JAVA_EXE);
        if java.exists() {
            candidates.push(java);
        }
    }

    candidates
}

/// 64-bit then 32-bit `Program Files` directories.
fn program_files_trees(env: &ScanEnv) -> [PathBuf; 2] {
    [
        env.var_path(PROGRAM_FILES)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM_FILES)),
        env.var_path(PROGRAM_FILES_X86)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM_FILES_X86)),
    ]
}

/// A `bin` directory plus at least one of the usual layout directories.
fn looks_like_runtime(install: &Path) -> bool {
    let names: Vec<String> = subdirectories(install)
        .iter()
        .filter_map(|dir| dir.file_name()?.to_str().map(str::to_lowercase))
        .collect();
    names.iter().any(|name| name == "bin")
        && names.iter().any(|name| LAYOUT_DIRS.contains(&name.as_str()))
}
