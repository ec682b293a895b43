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

//! Platform detection and process utilities.
//!
//! Discovery branches on the [`OsKind`] reported here. Detection never fails:
//! a platform that is not Windows, macOS or Linux is reported as
//! [`OsKind::Unknown`].

pub mod process;

use serde::Serialize;
use std::fmt;
use sysinfo::System;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OsKind {
    Windows,
    #[serde(rename = "macOS")]
    MacOs,
    Linux,
    Unknown,
}

impl OsKind {
    /// Map an OS name such as `std::env::consts::OS` to a kind.
    pub fn from_os_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("windows") {
            OsKind::Windows
        } else if name.contains("linux") {
            OsKind::Linux
        } else if name.contains("darwin") || name.contains("macos") {
            OsKind::MacOs
        } else {
            OsKind::Unknown
        }
    }

    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, OsKind::Unknown)
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsKind::Windows => "Windows",
            OsKind::MacOs => "macOS",
            OsKind::Linux => "Linux",
            OsKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Normalized operating system kind plus a free-text description of the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsInfo {
    pub kind: OsKind,
    pub raw: String,
}

impl OsInfo {
    pub fn new(kind: OsKind, raw: impl Into<String>) -> Self {
        Self {
            kind,
            raw: raw.into(),
        }
    }
}

impl fmt::Display for OsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.raw)
    }
}

/// Detect the host operating system.
pub fn detect_os() -> OsInfo {
    OsInfo::new(OsKind::current(), get_platform_description())
}

/// Get a user-friendly description of the current platform
pub fn get_platform_description() -> String {
    let os = System::long_os_version().unwrap_or_else(|| std::env::consts::OS.to_string());
    match System::kernel_version() {
        Some(kernel) => format!("{os}, kernel {kernel}, {}", std::env::consts::ARCH),
        None => format!("{os}, {}", std::env::consts::ARCH),
    }
}
