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

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub const JAVA_HOME: &str = "JAVA_HOME";
pub const PATH: &str = "PATH";
pub const SDKMAN_DIR: &str = "SDKMAN_DIR";
pub const ASDF_DATA_DIR: &str = "ASDF_DATA_DIR";
pub const XDG_DATA_HOME: &str = "XDG_DATA_HOME";
pub const SNAP: &str = "SNAP";
pub const APPDATA: &str = "APPDATA";
pub const HOME: &str = "HOME";
pub const PROGRAM_FILES: &str = "ProgramFiles";
pub const PROGRAM_FILES_X86: &str = "ProgramFiles(x86)";

const CAPTURED_VARS: [&str; 10] = [
    JAVA_HOME,
    PATH,
    SDKMAN_DIR,
    ASDF_DATA_DIR,
    XDG_DATA_HOME,
    SNAP,
    APPDATA,
    HOME,
    PROGRAM_FILES,
    PROGRAM_FILES_X86,
];

/// Snapshot of everything candidate enumeration reads from the host.
///
/// Fixed catalog locations such as `/usr/lib/jvm` are resolved under
/// [`ScanEnv::root`], which is `/` for the live host.
#[derive(Debug, Clone, Default)]
pub struct ScanEnv {
    vars: HashMap<String, OsString>,
    root: PathBuf,
    extra_dirs: Vec<PathBuf>,
}

impl ScanEnv {
    /// Empty environment rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            vars: HashMap::new(),
            root: root.into(),
            extra_dirs: Vec::new(),
        }
    }

    /// Capture the current process environment.
    pub fn from_process() -> Self {
        let mut scan_env = Self::new(Path::new("/"));
        for name in CAPTURED_VARS {
            if let Some(value) = env::var_os(name) {
                scan_env.vars.insert(name.to_string(), value);
            }
        }
        if scan_env.var(HOME).is_none()
            && let Some(home) = dirs::home_dir()
        {
            scan_env.vars.insert(HOME.to_string(), home.into_os_string());
        }
        scan_env
    }

    pub fn with_var(mut self, name: &str, value: impl Into<OsString>) -> Self {
        self.vars.insert(name.to_string(), value.into());
        self
    }

    pub fn without_var(mut self, name: &str) -> Self {
        self.vars.remove(name);
        self
    }

    pub fn with_extra_dirs(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.extra_dirs.extend(dirs);
        self
    }

    /// Value of a variable; unset and empty are the same.
    pub fn var(&self, name: &str) -> Option<&OsStr> {
        self.vars
            .get(name)
            .map(OsString::as_os_str)
            .filter(|value| !value.is_empty())
    }

    pub fn var_path(&self, name: &str) -> Option<PathBuf> {
        self.var(name).map(PathBuf::from)
    }

    pub fn home(&self) -> Option<PathBuf> {
        self.var_path(HOME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an absolute catalog path such as `/usr/lib/jvm` under the root.
    pub fn rooted(&self, absolute: &str) -> PathBuf {
        self.root.join(absolute.trim_start_matches('/'))
    }

    /// Directories listed in `PATH`, skipping empty entries.
    pub fn path_dirs(&self) -> Vec<PathBuf> {
        match self.var(PATH) {
            Some(path) => env::split_paths(path)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        }
    }

    /// `$<var>` when set, otherwise `$HOME/<default_under_home>`.
    pub fn dir_or_home_default(&self, var: &str, default_under_home: &str) -> Option<PathBuf> {
        self.var_path(var)
            .or_else(|| self.home().map(|home| home.join(default_under_home)))
    }

    pub fn extra_dirs(&self) -> &[PathBuf] {
        &self.extra_dirs
    }
}
