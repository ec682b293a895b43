use crate::config::JartenderConfig;
use crate::discovery::{DiscoveryEngine, Inventory};
use crate::error::Result;
use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};
use log::debug;

pub struct DetectCommand<'a> {
    config: &'a JartenderConfig,
}

impl<'a> DetectCommand<'a> {
    pub fn new(config: &'a JartenderConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, json: bool, jobs: Option<usize>, timeout: Option<u64>) -> Result<()> {
        let config = self.config.clone().with_discovery_overrides(jobs, timeout)?;
        debug!(
            "Detecting runtimes with {} job(s), {}s probe timeout",
            config.discovery.jobs, config.discovery.probe_timeout_secs
        );

        let inventory = DiscoveryEngine::from_config(&config).discover();

        if json {
            println!("{}", serde_json::to_string_pretty(&inventory)?);
        } else {
            print!("{}", render_inventory(&inventory));
        }
        Ok(())
    }
}

/// Human readable report of a discovery pass.
pub fn render_inventory(inventory: &Inventory) -> String {
    let mut out = format!("{}\n", inventory.os.to_string().bold());

    if !inventory.os.kind.is_supported() {
        out.push_str(&format!("{}\n", "platform not supported".yellow()));
        return out;
    }

    if inventory.is_empty() {
        out.push_str("No Java runtimes found\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Version", "Vendor", "Arch", "Path"]);
    for record in &inventory.runtimes {
        table.add_row(vec![
            record.index.to_string(),
            record.version.clone(),
            record.vendor.clone(),
            record.arch.clone(),
            record.path.display().to_string(),
        ]);
    }

    let count = inventory.runtimes.len();
    out.push_str(&format!("{table}\n"));
    out.push_str(&format!(
        "Found {} Java runtime{}\n",
        count.to_string().green().bold(),
        if count == 1 { "" } else { "s" }
    ));
    out
}
