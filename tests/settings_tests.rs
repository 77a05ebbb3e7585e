// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use payoutcal::config::{self, Clock, OutputFormat};
use payoutcal::{cli, commands::settings};
use tempfile::tempdir;

fn run_config(path: &std::path::Path, args: &[&str]) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(args);
    if let Some(("config", m)) = matches.subcommand() {
        settings::handle(path, m)
    } else {
        panic!("no config subcommand");
    }
}

#[test]
fn config_set_persists_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("payoutcal").join("config.json");

    run_config(&path, &["payoutcal", "config", "set", "clock", "utc"]).unwrap();
    run_config(&path, &["payoutcal", "config", "set", "output", "json"]).unwrap();

    let s = config::load_from(&path).unwrap();
    assert_eq!(s.clock, Clock::Utc);
    assert_eq!(s.output, OutputFormat::Json);
    assert_eq!(s.schedule_count, 4);
}

#[test]
fn config_set_rejects_bad_values_without_writing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    assert!(run_config(&path, &["payoutcal", "config", "set", "schedule_count", "many"]).is_err());
    assert!(run_config(&path, &["payoutcal", "config", "set", "timezone", "utc"]).is_err());
    assert!(!path.exists());
}

#[test]
fn config_set_repairs_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ clock: ").unwrap();

    run_config(&path, &["payoutcal", "config", "path"]).unwrap();
    assert!(run_config(&path, &["payoutcal", "config", "show"]).is_err());

    run_config(&path, &["payoutcal", "config", "set", "clock", "utc"]).unwrap();
    let s = config::load_from(&path).unwrap();
    assert_eq!(s.clock, Clock::Utc);
    assert_eq!(s.output, OutputFormat::Table);
}

#[test]
fn bare_config_prints_help_without_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    run_config(&path, &["payoutcal", "config"]).unwrap();
    assert!(!path.exists());
}

#[test]
fn config_show_and_path_do_not_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");

    run_config(&path, &["payoutcal", "config", "show"]).unwrap();
    run_config(&path, &["payoutcal", "config", "path"]).unwrap();
    assert!(!path.exists());
}
