// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use payoutcal::{cli, commands, config};

const LOG_ENV: &str = "PAYOUTCAL_LOG";

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    init_logging(matches.get_count("verbose"));

    let config_path = config::config_path()?;
    // Only commands that read settings load them; `config` repairs its own file.
    let settings = || config::load_from(&config_path);

    match matches.subcommand() {
        Some(("next", sub)) => commands::cycles::handle_next(&settings()?, sub)?,
        Some(("current", sub)) => commands::cycles::handle_current(&settings()?, sub)?,
        Some(("quarter", sub)) => commands::cycles::handle_quarter(&settings()?, sub)?,
        Some(("schedule", sub)) => commands::schedule::handle(&settings()?, sub)?,
        Some(("export", sub)) => commands::exporter::handle(sub)?,
        Some(("config", sub)) => commands::settings::handle(&config_path, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
