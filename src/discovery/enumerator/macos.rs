use crate::discovery::env::{ASDF_DATA_DIR, JAVA_HOME, SDKMAN_DIR, ScanEnv};
use crate::discovery::scan::{glob_children, push_runtime_layouts, subdirectories};
use std::path::PathBuf;

const JAVA: &str = "java";

/// Launchers shipped at fixed locations by Apple and legacy plug-ins.
const FIXED_LAUNCHERS: [&str; 4] = [
    "/usr/bin/java",
    "/Applications/Xcode.app/Contents/Applications/Application Loader.app/Contents/MacOS/itms/java/bin/java",
    "/Library/Internet Plug-Ins/JavaAppletPlugin.plugin/Contents/Home/bin/java",
    "/System/Library/Frameworks/JavaVM.framework/Versions/Current/Commands/java",
];

const LIBRARY_JVMS: &str = "/Library/Java/JavaVirtualMachines";
const SYSTEM_LIBRARY_JVMS: &str = "/System/Library/Java/JavaVirtualMachines";

const BUNDLE_JAVA: &str = "Contents/Home/bin/java";
const BUNDLE_JRE_JAVA: &str = "Contents/Home/jre/bin/java";
const BUNDLE_COMMANDS_JAVA: &str = "Contents/Commands/java";

pub(super) fn candidates(env: &ScanEnv) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = FIXED_LAUNCHERS
        .iter()
        .map(|launcher| env.rooted(launcher))
        .collect();

    let library = env.rooted(LIBRARY_JVMS);
    candidates.extend(glob_children(&library, BUNDLE_JAVA));
    candidates.extend(glob_children(&library, BUNDLE_JRE_JAVA));

    let system_library = env.rooted(SYSTEM_LIBRARY_JVMS);
    candidates.extend(glob_children(&system_library, BUNDLE_JAVA));
    candidates.extend(glob_children(&system_library, BUNDLE_COMMANDS_JAVA));

    if let Some(sdkman) = env.dir_or_home_default(SDKMAN_DIR, ".sdkman") {
        candidates.extend(glob_children(&sdkman.join("candidates/java"), "bin/java"));
    }
    if let Some(asdf) = env.dir_or_home_default(ASDF_DATA_DIR, ".asdf") {
        candidates.extend(glob_children(&asdf.join("installs/java"), "bin/java"));
    }

    // JDKs downloaded by IDEs
    if let Some(home) = env.home() {
        let user_library = home.join("Library/Java/JavaVirtualMachines");
        candidates.extend(glob_children(&user_library, BUNDLE_JAVA));
        candidates.extend(glob_children(&user_library, BUNDLE_COMMANDS_JAVA));
    }

    for dir in env.extra_dirs() {
        push_runtime_layouts(&mut candidates, subdirectories(dir), JAVA);
    }

    if let Some(java_home) = env.var_path(JAVA_HOME) {
        candidates.push(java_home.join("bin").join(JAVA));
    }

    candidates
}
