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

use crate::error::JartenderError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a JartenderError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a JartenderError) -> Self {
        let (suggestion, details) = match error {
            JartenderError::ExecutableNotFound(path) => {
                let suggestion = Some(format!(
                    "Check that '{path}' exists, or run 'jartender detect' to list the runtimes \
                     found on this machine."
                ));
                let details = None;
                (suggestion, details)
            }
            JartenderError::ProbeSpawn { reason, .. } => {
                let suggestion = Some(
                    "Ensure the file is a Java launcher and that you have permission to execute \
                     it."
                        .to_string(),
                );
                let details = Some(format!("Spawn failed: {reason}"));
                (suggestion, details)
            }
            JartenderError::ProbeTimeout { .. } => {
                let suggestion = Some(
                    "Increase the probe timeout with --timeout or set \
                     JARTENDER_DISCOVERY__PROBE_TIMEOUT_SECS."
                        .to_string(),
                );
                let details = None;
                (suggestion, details)
            }
            JartenderError::ConfigError(msg) | JartenderError::InvalidConfig(msg) => {
                let suggestion = Some(
                    "Check config.toml in your jartender home directory (JARTENDER_HOME, default \
                     ~/.jartender) and any JARTENDER_* environment variables."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            JartenderError::PermissionDenied(path) => {
                let suggestion = if cfg!(unix) {
                    Some(format!("Ensure you have read permissions to: {path}"))
                } else {
                    Some(format!(
                        "Run as Administrator or ensure you have read permissions to: {path}"
                    ))
                };
                let details = None;
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
