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

use clap::{Parser, Subcommand};
use jartender::commands::detect::DetectCommand;
use jartender::commands::probe::ProbeCommand;
use jartender::config::new_jartender_config;
use jartender::error::{Result, format_error_chain, get_exit_code};
use jartender::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jartender")]
#[command(author, version, about = "Find and rank the Java runtimes installed on this machine", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan this machine for Java runtimes, sorted by version
    #[command(visible_alias = "d", alias = "scan")]
    Detect {
        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Number of runtimes probed at the same time
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,

        /// Per-runtime probe timeout in seconds
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,
    },

    /// Report version, vendor and architecture of one Java executable
    #[command(visible_alias = "p")]
    Probe {
        /// Path to a java or java.exe launcher
        path: PathBuf,

        /// Output in JSON format
        #[arg(long)]
        json: bool,

        /// Probe timeout in seconds
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,
    },
}

fn setup_logger(cli: &Cli) {
    logging::setup_logger(cli.verbose);
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger based on CLI flags and environment
    setup_logger(&cli);

    // Load configuration once at startup
    let config = match new_jartender_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            std::process::exit(get_exit_code(&e));
        }
    };

    let result: Result<()> = (|| match cli.command {
        Commands::Detect {
            json,
            jobs,
            timeout,
        } => {
            let command = DetectCommand::new(&config)?;
            command.execute(json, jobs, timeout)
        }
        Commands::Probe {
            path,
            json,
            timeout,
        } => {
            let command = ProbeCommand::new(&config)?;
            command.execute(&path, json, timeout)
        }
    })();

    if let Err(e) = result {
        eprintln!("{}", format_error_chain(&e));
        std::process::exit(get_exit_code(&e));
    }
}
