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

//! Per-OS candidate enumeration strategies.
//!
//! Each strategy returns the raw candidate list for its platform, possibly
//! with duplicates and paths that do not exist. Deduplication and existence
//! filtering happen afterwards in [`PathSet`](crate::discovery::path_set::PathSet).

mod linux;
mod macos;
mod windows;

use crate::discovery::env::ScanEnv;
use crate::discovery::registry::RegistrySource;
use crate::platform::OsKind;
use log::debug;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateEnumerator {
    Linux,
    MacOs,
    Windows,
    Unsupported,
}

impl CandidateEnumerator {
    pub fn for_os(kind: OsKind) -> Self {
        match kind {
            OsKind::Linux => CandidateEnumerator::Linux,
            OsKind::MacOs => CandidateEnumerator::MacOs,
            OsKind::Windows => CandidateEnumerator::Windows,
            OsKind::Unknown => CandidateEnumerator::Unsupported,
        }
    }

    /// Collect candidate launcher paths.
    ///
    /// The registry is only consulted by the Windows strategy.
    pub fn enumerate(&self, env: &ScanEnv, registry: &dyn RegistrySource) -> Vec<PathBuf> {
        let candidates = match self {
            CandidateEnumerator::Linux => linux::candidates(env),
            CandidateEnumerator::MacOs => macos::candidates(env),
            CandidateEnumerator::Windows => windows::candidates(env, registry),
            CandidateEnumerator::Unsupported => Vec::new(),
        };
        debug!("{self:?} enumeration produced {} candidate(s)", candidates.len());
        candidates
    }
}
