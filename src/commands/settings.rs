// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{self, Settings};
use crate::utils::{maybe_print_json, output_flags, pretty_table};
use anyhow::Result;
use std::path::Path;
use tracing::warn;

pub fn handle(path: &Path, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", sub)) => {
            let settings = config::load_from(path)?;
            let (json_flag, jsonl_flag) = output_flags(sub, &settings);
            if !maybe_print_json(json_flag, jsonl_flag, &settings)? {
                println!("{}", pretty_table(&["Key", "Value"], settings.rows()));
            }
        }
        Some(("path", _)) => {
            println!("{}", path.display());
        }
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("KEY").unwrap();
            let value = sub.get_one::<String>("VALUE").unwrap();
            set(path, key, value)?;
            println!("Set {} = {}", key.trim(), value.trim());
        }
        _ => {
            if let Some(cmd) = crate::cli::build_cli().find_subcommand_mut("config") {
                cmd.print_help()?;
                println!();
            }
        }
    }
    Ok(())
}

/// Update one key. A file that no longer parses is replaced by defaults
/// plus the new value, so `set` can always repair it.
pub fn set(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut settings = match config::load_from(path) {
        Ok(s) => s,
        Err(err) => {
            warn!("{:#}; starting from default settings", err);
            Settings::default()
        }
    };
    settings.set(key, value)?;
    config::save_to(path, &settings)
}
