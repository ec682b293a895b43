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

//! Java installs recorded in the Windows registry by vendor installers.
//!
//! Vendors register each install as a subkey (usually named after the
//! version) below a vendor-specific base key. The catalog below lists those
//! base keys; [`RegistryScanner`] walks every entry the same way.

use log::{debug, trace};
use std::io;
use std::path::PathBuf;

const JAVA_EXE: &str = "java.exe";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hive {
    CurrentUser,
    LocalMachine,
}

impl Hive {
    pub const ALL: [Hive; 2] = [Hive::CurrentUser, Hive::LocalMachine];
}

/// Which side of registry redirection to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryView {
    Bits64,
    Bits32,
}

const BOTH_VIEWS: &[RegistryView] = &[RegistryView::Bits64, RegistryView::Bits32];
const ONLY_64: &[RegistryView] = &[RegistryView::Bits64];

/// One vendor's install-location convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub vendor: &'static str,
    /// Base key below the hive; its subkeys are enumerated.
    pub key: &'static str,
    /// Value holding the install directory.
    pub value_name: &'static str,
    /// Appended to each subkey name before the value is read.
    pub subkey_suffix: &'static str,
    pub views: &'static [RegistryView],
}

pub const REGISTRY_CATALOG: &[RegistryEntry] = &[
    RegistryEntry {
        vendor: "Oracle",
        key: r"SOFTWARE\JavaSoft\Java Runtime Environment",
        value_name: "JavaHome",
        subkey_suffix: "",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "Oracle",
        key: r"SOFTWARE\JavaSoft\Java Development Kit",
        value_name: "JavaHome",
        subkey_suffix: "",
        views: BOTH_VIEWS,
    },
    // Java 9+ layout, also used by Amazon Corretto
    RegistryEntry {
        vendor: "JavaSoft",
        key: r"SOFTWARE\JavaSoft\JRE",
        value_name: "JavaHome",
        subkey_suffix: "",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "JavaSoft",
        key: r"SOFTWARE\JavaSoft\JDK",
        value_name: "JavaHome",
        subkey_suffix: "",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "AdoptOpenJDK",
        key: r"SOFTWARE\AdoptOpenJDK\JRE",
        value_name: "Path",
        subkey_suffix: r"\hotspot\MSI",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "AdoptOpenJDK",
        key: r"SOFTWARE\AdoptOpenJDK\JDK",
        value_name: "Path",
        subkey_suffix: r"\hotspot\MSI",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "Eclipse Foundation",
        key: r"SOFTWARE\Eclipse Foundation\JDK",
        value_name: "Path",
        subkey_suffix: r"\hotspot\MSI",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "Eclipse Adoptium",
        key: r"SOFTWARE\Eclipse Adoptium\JRE",
        value_name: "Path",
        subkey_suffix: r"\hotspot\MSI",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "Eclipse Adoptium",
        key: r"SOFTWARE\Eclipse Adoptium\JDK",
        value_name: "Path",
        subkey_suffix: r"\hotspot\MSI",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "IBM Semeru",
        key: r"SOFTWARE\Semeru\JRE",
        value_name: "Path",
        subkey_suffix: r"\openj9\MSI",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "IBM Semeru",
        key: r"SOFTWARE\Semeru\JDK",
        value_name: "Path",
        subkey_suffix: r"\openj9\MSI",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "Microsoft",
        key: r"SOFTWARE\Microsoft\JDK",
        value_name: "Path",
        subkey_suffix: r"\hotspot\MSI",
        views: ONLY_64,
    },
    RegistryEntry {
        vendor: "Azul Zulu",
        key: r"SOFTWARE\Azul Systems\Zulu",
        value_name: "InstallationPath",
        subkey_suffix: "",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "BellSoft Liberica",
        key: r"SOFTWARE\BellSoft\Liberica",
        value_name: "InstallationPath",
        subkey_suffix: "",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "BellSoft Liberica NIK",
        key: r"SOFTWARE\BellSoft\LibericaNIK",
        value_name: "InstallationPath",
        subkey_suffix: "",
        views: BOTH_VIEWS,
    },
    RegistryEntry {
        vendor: "SapMachine",
        key: r"SOFTWARE\SapMachine\JDK",
        value_name: "JavaHome",
        subkey_suffix: "",
        views: BOTH_VIEWS,
    },
];

/// Read access to a registry.
pub trait RegistrySource {
    /// Names of the immediate subkeys of `key`.
    fn subkeys(&self, hive: Hive, view: RegistryView, key: &str) -> io::Result<Vec<String>>;

    /// String value `name` stored under `key`.
    fn string_value(
        &self,
        hive: Hive,
        view: RegistryView,
        key: &str,
        name: &str,
    ) -> io::Result<String>;
}

/// Registry with no keys, used where no registry exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRegistry;

impl RegistrySource for NoRegistry {
    fn subkeys(&self, _hive: Hive, _view: RegistryView, key: &str) -> io::Result<Vec<String>> {
        Err(io::Error::new(io::ErrorKind::NotFound, key.to_string()))
    }

    fn string_value(
        &self,
        _hive: Hive,
        _view: RegistryView,
        key: &str,
        _name: &str,
    ) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::NotFound, key.to_string()))
    }
}

#[cfg(windows)]
pub use windows_registry::WindowsRegistry;

#[cfg(windows)]
mod windows_registry {
    use super::{Hive, RegistrySource, RegistryView};
    use std::io;
    use winreg::RegKey;
    use winreg::enums::{
        HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, KEY_WOW64_32KEY, KEY_WOW64_64KEY,
    };

    /// The live registry of the host, read through `winreg`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct WindowsRegistry;

    impl WindowsRegistry {
        fn open(hive: Hive, view: RegistryView, key: &str) -> io::Result<RegKey> {
            let root = match hive {
                Hive::CurrentUser => RegKey::predef(HKEY_CURRENT_USER),
                Hive::LocalMachine => RegKey::predef(HKEY_LOCAL_MACHINE),
            };
            let redirection = match view {
                RegistryView::Bits64 => KEY_WOW64_64KEY,
                RegistryView::Bits32 => KEY_WOW64_32KEY,
            };
            root.open_subkey_with_flags(key, KEY_READ | redirection)
        }
    }

    impl RegistrySource for WindowsRegistry {
        fn subkeys(&self, hive: Hive, view: RegistryView, key: &str) -> io::Result<Vec<String>> {
            let base = Self::open(hive, view, key)?;
            // Enumeration stops at the first failing index
            Ok(base.enum_keys().map_while(|name| name.ok()).collect())
        }

        fn string_value(
            &self,
            hive: Hive,
            view: RegistryView,
            key: &str,
            name: &str,
        ) -> io::Result<String> {
            Self::open(hive, view, key)?.get_value::<String, _>(name)
        }
    }
}

/// The registry source for the host this binary runs on.
pub fn host_registry() -> Box<dyn RegistrySource + Send + Sync> {
    #[cfg(windows)]
    {
        Box::new(WindowsRegistry)
    }
    #[cfg(not(windows))]
    {
        Box::new(NoRegistry)
    }
}

/// Walks a registry catalog and resolves each install to a `java.exe`.
pub struct RegistryScanner<'a> {
    source: &'a dyn RegistrySource,
    catalog: &'a [RegistryEntry],
}

impl<'a> RegistryScanner<'a> {
    pub fn new(source: &'a dyn RegistrySource) -> Self {
        Self::with_catalog(source, REGISTRY_CATALOG)
    }

    pub fn with_catalog(source: &'a dyn RegistrySource, catalog: &'a [RegistryEntry]) -> Self {
        Self { source, catalog }
    }

    /// Candidate executables from every entry, view and hive.
    ///
    /// A missing key or value only skips that combination.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        for entry in self.catalog {
            for &view in entry.views {
                for hive in Hive::ALL {
                    candidates.extend(self.scan_entry(entry, hive, view));
                }
            }
        }
        debug!("Registry yielded {} candidate(s)", candidates.len());
        candidates
    }

    fn scan_entry(&self, entry: &RegistryEntry, hive: Hive, view: RegistryView) -> Vec<PathBuf> {
        let subkeys = match self.source.subkeys(hive, view, entry.key) {
            Ok(subkeys) => subkeys,
            Err(e) => {
                trace!("{hive:?}\\{} ({view:?}) unavailable: {e}", entry.key);
                return Vec::new();
            }
        };

        subkeys
            .iter()
            .filter_map(|subkey| {
                let key = format!("{}\\{subkey}{}", entry.key, entry.subkey_suffix);
                match self.source.string_value(hive, view, &key, entry.value_name) {
                    Ok(install_dir) => resolve_java_exe(&install_dir),
                    Err(e) => {
                        trace!("{hive:?}\\{key} has no {}: {e}", entry.value_name);
                        None
                    }
                }
            })
            .collect()
    }
}

/// `java.exe` directly inside `install_dir`, else inside its `bin` directory.
fn resolve_java_exe(install_dir: &str) -> Option<PathBuf> {
    let dir = PathBuf::from(install_dir);
    [dir.join(JAVA_EXE), dir.join("bin").join(JAVA_EXE)]
        .into_iter()
        .find(|candidate| candidate.exists())
}
