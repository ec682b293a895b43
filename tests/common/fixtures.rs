// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Shared fixtures for fake Java installations
use std::fs;
use std::path::{Path, PathBuf};

/// Writes an executable `java` script into `dir` that prints a property
/// dump on stderr the way a real launcher does for `-XshowSettings:properties`.
///
/// # Arguments
/// * `dir` - Directory the script is written into (created if missing)
/// * `version` - Value printed for `java.version`
/// * `arch` - Value printed for `os.arch`
///
/// # Returns
/// The path to the script
#[cfg(unix)]
pub fn create_fake_java(dir: &Path, version: &str, arch: &str) -> PathBuf {
    create_java_script(
        dir,
        &format!(
            "echo 'Property settings:' >&2\n\
             echo '    java.version = {version}' >&2\n\
             echo '    os.arch = {arch}' >&2\n\
             echo 'openjdk version \"{version}\"' >&2"
        ),
    )
}

/// Writes an executable `java` script that never finishes on its own.
#[cfg(unix)]
pub fn create_hanging_java(dir: &Path) -> PathBuf {
    create_java_script(dir, "exec sleep 30")
}

/// Writes an executable `java` script that rejects every option.
#[cfg(unix)]
pub fn create_failing_java(dir: &Path) -> PathBuf {
    create_java_script(dir, "echo 'Unrecognized option' >&2\nexit 1")
}

#[cfg(unix)]
fn create_java_script(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(dir).unwrap();
    let path = dir.join("java");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Creates `<root>/<relative>/bin/<exe>` holding `contents` and returns its path.
pub fn create_launcher_file(root: &Path, relative: &str, exe: &str, contents: &str) -> PathBuf {
    let bin = root.join(relative).join("bin");
    fs::create_dir_all(&bin).unwrap();
    let path = bin.join(exe);
    fs::write(&path, contents).unwrap();
    path
}
