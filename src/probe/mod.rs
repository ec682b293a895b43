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

//! Out-of-process interrogation of a Java launcher.
//!
//! The launcher is run as `<path> -XshowSettings:properties -version` and the
//! `key = value` lines of its property dump are scanned for the runtime
//! version, vendor and CPU architecture.

use crate::error::{JartenderError, Result};
use crate::platform::process::run_with_timeout;
use log::debug;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const PROBE_ARGS: [&str; 2] = ["-XshowSettings:properties", "-version"];
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

const VERSION_KEY: &str = "java.version";
const VENDOR_VERSION_KEY: &str = "java.vendor.version";
const VENDOR_KEY: &str = "java.vendor";
const ARCH_KEY: &str = "os.arch";

/// Facts a candidate executable reported about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub path: PathBuf,
    pub version: Option<String>,
    pub vendor_version: Option<String>,
    pub arch: Option<String>,
    pub valid: bool,
    pub error: Option<String>,
}

impl ProbeResult {
    /// Build a result from the merged stdout/stderr text of a probe.
    pub fn from_output(path: &Path, output: &str) -> Self {
        let version = extract_property(output, VERSION_KEY);
        let vendor_version = extract_property(output, VENDOR_VERSION_KEY)
            .or_else(|| extract_property(output, VENDOR_KEY));
        let arch = extract_property(output, ARCH_KEY);
        let valid = version.is_some() || vendor_version.is_some() || arch.is_some();

        Self {
            path: path.to_path_buf(),
            version,
            vendor_version,
            arch,
            valid,
            error: (!valid).then(|| "No runtime properties found in output".to_string()),
        }
    }

    pub fn failed(path: &Path, error: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            version: None,
            vendor_version: None,
            arch: None,
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Value of the first `key = value` line whose key matches exactly.
///
/// Empty values are treated as absent.
pub fn extract_property(text: &str, key: &str) -> Option<String> {
    text.lines().find_map(|line| {
        let (name, value) = line.split_once('=')?;
        if name.trim() != key {
            return None;
        }
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Capability of turning a candidate path into a [`ProbeResult`].
///
/// Implementations must never fail: every problem is reported through an
/// invalid result so one bad candidate cannot abort a scan.
pub trait Probe: Sync {
    fn probe(&self, path: &Path) -> ProbeResult;
}

/// Probe that runs the candidate as a subprocess with a bounded timeout.
#[derive(Debug, Clone)]
pub struct RuntimeProbe {
    timeout: Duration,
}

impl RuntimeProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for RuntimeProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}

impl RuntimeProbe {
    /// Probe `path`, propagating launch failures and timeouts as errors.
    ///
    /// A launcher that runs to completion always yields a result; a non-zero
    /// exit or a missing property dump makes it invalid.
    pub fn try_probe(&self, path: &Path) -> Result<ProbeResult> {
        debug!("Probing {}", path.display());

        let output = run_with_timeout(path, &PROBE_ARGS, self.timeout)?;

        if !output.status.success() {
            let error = JartenderError::ProbeExit {
                path: path.display().to_string(),
                status: output.status.to_string(),
            };
            debug!("Probe of {} failed: {error}", path.display());
            return Ok(ProbeResult::failed(path, error.to_string()));
        }

        let result = ProbeResult::from_output(path, &output.combined());
        debug!(
            "Probed {}: version={:?} vendor={:?} arch={:?}",
            path.display(),
            result.version,
            result.vendor_version,
            result.arch
        );
        Ok(result)
    }
}

impl Probe for RuntimeProbe {
    fn probe(&self, path: &Path) -> ProbeResult {
        self.try_probe(path).unwrap_or_else(|e| {
            debug!("Probe of {} failed: {e}", path.display());
            ProbeResult::failed(path, e.to_string())
        })
    }
}
