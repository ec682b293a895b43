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

mod context;
mod exit_codes;
mod format;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_chain;

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JartenderError {
    #[error("Java executable not found: {0}")]
    ExecutableNotFound(String),

    #[error("Failed to launch '{path}': {reason}")]
    ProbeSpawn { path: String, reason: String },

    #[error("'{path}' did not finish within {timeout:?}")]
    ProbeTimeout { path: String, timeout: Duration },

    #[error("'{path}' exited with {status}")]
    ProbeExit { path: String, status: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("System error: {0}")]
    SystemError(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for JartenderError {
    fn from(err: config::ConfigError) -> Self {
        JartenderError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, JartenderError>;
