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

//! Java runtime discovery.
//!
//! [`DiscoveryEngine::discover`] runs one complete pass:
//!
//! 1. detect the host OS
//! 2. enumerate candidate launchers with the matching [`CandidateEnumerator`]
//! 3. canonicalize and deduplicate them through a [`PathSet`]
//! 4. probe every surviving path
//! 5. sort the records by [`VersionKey`] and number them from 1
//!
//! Nothing in a pass fails: unreadable sources contribute no candidates and
//! failed probes produce records whose fields read `Unknown`.

pub mod enumerator;
pub mod env;
pub mod path_set;
pub mod registry;
pub mod scan;

pub use enumerator::CandidateEnumerator;
pub use env::ScanEnv;
pub use path_set::{PathSet, unique_existing};
pub use registry::{RegistryScanner, RegistrySource};

use crate::config::JartenderConfig;
use crate::platform::{OsInfo, detect_os};
use crate::probe::{Probe, ProbeResult, RuntimeProbe};
use crate::version::VersionKey;
use log::{debug, info, warn};
use serde::Serialize;
use std::path::PathBuf;
use std::thread;

/// Placeholder for a fact the probe could not recover.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// One discovered runtime as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeRecord {
    /// 1-based position in the sorted inventory.
    pub index: usize,
    pub version: String,
    pub vendor: String,
    pub arch: String,
    pub path: PathBuf,
}

impl RuntimeRecord {
    fn from_probe(result: ProbeResult) -> Self {
        let or_unknown = |value: Option<String>| value.unwrap_or_else(|| UNKNOWN_FIELD.to_string());
        Self {
            index: 0,
            version: or_unknown(result.version),
            vendor: or_unknown(result.vendor_version),
            arch: or_unknown(result.arch),
            path: result.path,
        }
    }

    pub fn version_key(&self) -> VersionKey {
        VersionKey::parse(Some(self.version.as_str()))
    }
}

/// Result of one discovery pass.
#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    pub os: OsInfo,
    pub runtimes: Vec<RuntimeRecord>,
}

impl Inventory {
    pub fn is_empty(&self) -> bool {
        self.runtimes.is_empty()
    }
}

pub struct DiscoveryEngine<P: Probe = RuntimeProbe> {
    probe: P,
    env: ScanEnv,
    os: Option<OsInfo>,
    registry: Box<dyn RegistrySource + Send + Sync>,
    jobs: usize,
}

impl DiscoveryEngine<RuntimeProbe> {
    /// Engine reading the live host with default settings.
    pub fn new() -> Self {
        Self::with_probe(RuntimeProbe::default())
    }

    /// Engine reading the live host with probe timeout, worker count and
    /// extra directories taken from `config`.
    pub fn from_config(config: &JartenderConfig) -> Self {
        let env = ScanEnv::from_process().with_extra_dirs(config.discovery.extra_dirs.clone());
        Self::with_probe(RuntimeProbe::new(config.probe_timeout()))
            .with_env(env)
            .with_jobs(config.discovery.jobs)
    }
}

impl Default for DiscoveryEngine<RuntimeProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Probe> DiscoveryEngine<P> {
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe,
            env: ScanEnv::from_process(),
            os: None,
            registry: registry::host_registry(),
            jobs: 1,
        }
    }

    pub fn with_env(mut self, env: ScanEnv) -> Self {
        self.env = env;
        self
    }

    /// Use `os` instead of detecting the host platform.
    pub fn with_os(mut self, os: OsInfo) -> Self {
        self.os = Some(os);
        self
    }

    pub fn with_registry(mut self, registry: Box<dyn RegistrySource + Send + Sync>) -> Self {
        self.registry = registry;
        self
    }

    /// Number of probes allowed to run at once; 0 is treated as 1.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn discover(&self) -> Inventory {
        let os = self.os.clone().unwrap_or_else(detect_os);
        if !os.kind.is_supported() {
            info!("Platform not supported: {os}");
            return Inventory {
                os,
                runtimes: Vec::new(),
            };
        }

        let candidates = CandidateEnumerator::for_os(os.kind).enumerate(&self.env, &*self.registry);
        let raw_count = candidates.len();
        let paths = unique_existing(candidates);
        debug!("{raw_count} candidate(s), {} unique existing path(s)", paths.len());

        let mut runtimes: Vec<RuntimeRecord> = self
            .probe_all(&paths)
            .into_iter()
            .map(RuntimeRecord::from_probe)
            .collect();
        runtimes.sort_by_cached_key(RuntimeRecord::version_key);
        for (position, record) in runtimes.iter_mut().enumerate() {
            record.index = position + 1;
        }

        info!("Discovered {} Java runtime(s) on {}", runtimes.len(), os.kind);
        Inventory { os, runtimes }
    }

    /// Probe every path, returning results in input order.
    fn probe_all(&self, paths: &[PathBuf]) -> Vec<ProbeResult> {
        if self.jobs <= 1 || paths.len() <= 1 {
            return paths.iter().map(|path| self.probe.probe(path)).collect();
        }

        let chunk_size = paths.len().div_ceil(self.jobs);
        debug!("Probing {} path(s) on {} worker(s)", paths.len(), self.jobs);

        let probe = &self.probe;
        thread::scope(|scope| {
            let workers: Vec<_> = paths
                .chunks(chunk_size)
                .map(|chunk| {
                    let handle = scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|path| probe.probe(path))
                            .collect::<Vec<_>>()
                    });
                    (chunk, handle)
                })
                .collect();

            workers
                .into_iter()
                .flat_map(|(chunk, handle)| match handle.join() {
                    Ok(results) => results,
                    Err(_) => {
                        warn!("A probe worker panicked; marking {} path(s) invalid", chunk.len());
                        chunk
                            .iter()
                            .map(|path| ProbeResult::failed(path, "probe worker panicked"))
                            .collect()
                    }
                })
                .collect()
        })
    }
}
