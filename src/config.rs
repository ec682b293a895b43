use crate::error::{JartenderError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE_NAME: &str = "config.toml";
const HOME_DIR_NAME: &str = ".jartender";
const ENV_PREFIX: &str = "JARTENDER";
const HOME_ENV_VAR: &str = "JARTENDER_HOME";
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_JOBS: usize = 1;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JartenderConfig {
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(skip)]
    home: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Number of probes run at the same time
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Additional roots scanned for `<dir>/bin/java` layouts
    #[serde(default)]
    pub extra_dirs: Vec<PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            jobs: DEFAULT_JOBS,
            extra_dirs: Vec::new(),
        }
    }
}

fn default_probe_timeout_secs() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

fn default_jobs() -> usize {
    DEFAULT_JOBS
}

impl JartenderConfig {
    /// Load configuration rooted at `home`.
    ///
    /// Values come from `<home>/config.toml` when present, then from
    /// `JARTENDER_*` environment variables using `__` as the section separator
    /// (e.g. `JARTENDER_DISCOVERY__JOBS=4`).
    pub fn new(home: PathBuf) -> Result<Self> {
        let config_path = home.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            log::debug!("Loading config from {config_path:?}");
        } else {
            log::debug!("Config file not found at {config_path:?}, using defaults");
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: JartenderConfig = settings.try_deserialize()?;
        config.home = home;
        config.validate()?;
        Ok(config)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.discovery.probe_timeout_secs)
    }

    /// Apply per-invocation overrides such as command line flags.
    pub fn with_discovery_overrides(
        mut self,
        jobs: Option<usize>,
        probe_timeout_secs: Option<u64>,
    ) -> Result<Self> {
        if let Some(jobs) = jobs {
            self.discovery.jobs = jobs;
        }
        if let Some(secs) = probe_timeout_secs {
            self.discovery.probe_timeout_secs = secs;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.discovery.probe_timeout_secs == 0 {
            return Err(JartenderError::InvalidConfig(
                "discovery.probe_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.discovery.jobs == 0 {
            return Err(JartenderError::InvalidConfig(
                "discovery.jobs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the jartender home directory and load its configuration.
pub fn new_jartender_config() -> Result<JartenderConfig> {
    let home = match env::var_os(HOME_ENV_VAR) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir()
            .ok_or_else(|| {
                JartenderError::ConfigError("Unable to determine the home directory".to_string())
            })?
            .join(HOME_DIR_NAME),
    };
    JartenderConfig::new(home)
}
