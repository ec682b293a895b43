use crate::config::JartenderConfig;
use crate::discovery::UNKNOWN_FIELD;
use crate::error::{JartenderError, Result};
use crate::probe::{ProbeResult, RuntimeProbe};
use colored::Colorize;
use std::fs;
use std::io;
use std::path::Path;

pub struct ProbeCommand<'a> {
    config: &'a JartenderConfig,
}

impl<'a> ProbeCommand<'a> {
    pub fn new(config: &'a JartenderConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, path: &Path, json: bool, timeout: Option<u64>) -> Result<()> {
        check_executable_path(path)?;

        let config = self.config.clone().with_discovery_overrides(None, timeout)?;
        let result = RuntimeProbe::new(config.probe_timeout()).try_probe(path)?;

        if json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            print!("{}", render_result(&result));
        }
        Ok(())
    }
}

fn check_executable_path(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(()),
        Ok(_) => Err(JartenderError::ExecutableNotFound(format!(
            "{} is not a file",
            path.display()
        ))),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            Err(JartenderError::PermissionDenied(path.display().to_string()))
        }
        Err(_) => Err(JartenderError::ExecutableNotFound(path.display().to_string())),
    }
}

fn render_result(result: &ProbeResult) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| UNKNOWN_FIELD.to_string());

    let mut out = format!("{}\n", result.path.display().to_string().bold());
    out.push_str(&format!("  Version: {}\n", field(&result.version)));
    out.push_str(&format!("  Vendor:  {}\n", field(&result.vendor_version)));
    out.push_str(&format!("  Arch:    {}\n", field(&result.arch)));
    if result.valid {
        out.push_str(&format!("  Status:  {}\n", "valid".green()));
    } else {
        out.push_str(&format!("  Status:  {}\n", "invalid".red()));
        if let Some(error) = &result.error {
            out.push_str(&format!("  Error:   {error}\n"));
        }
    }
    out
}
