// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::PayoutError;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const QUALIFIER: &str = "com.alphavelocity";
const ORGANIZATION: &str = "Payoutcal";
const APPLICATION: &str = "payoutcal";

pub const CONFIG_ENV: &str = "PAYOUTCAL_CONFIG";

/// Which calendar "today" is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clock {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Jsonl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub clock: Clock,
    pub output: OutputFormat,
    pub schedule_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            clock: Clock::Local,
            output: OutputFormat::Table,
            schedule_count: 4,
        }
    }
}

impl Settings {
    pub const KEYS: [&'static str; 3] = ["clock", "output", "schedule_count"];

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PayoutError> {
        let v = value.trim().to_lowercase();
        match key.trim() {
            "clock" => {
                self.clock = match v.as_str() {
                    "local" => Clock::Local,
                    "utc" => Clock::Utc,
                    _ => {
                        return Err(PayoutError::Config(format!(
                            "clock must be local|utc, got '{}'",
                            value
                        )));
                    }
                }
            }
            "output" => {
                self.output = match v.as_str() {
                    "table" => OutputFormat::Table,
                    "json" => OutputFormat::Json,
                    "jsonl" => OutputFormat::Jsonl,
                    _ => {
                        return Err(PayoutError::Config(format!(
                            "output must be table|json|jsonl, got '{}'",
                            value
                        )));
                    }
                }
            }
            "schedule_count" => {
                self.schedule_count = v.parse::<usize>().map_err(|_| {
                    PayoutError::Config(format!("schedule_count must be a number, got '{}'", value))
                })?;
            }
            other => {
                return Err(PayoutError::Config(format!(
                    "unknown key '{}' (use {})",
                    other,
                    Self::KEYS.join("|")
                )));
            }
        }
        Ok(())
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        let clock = match self.clock {
            Clock::Local => "local",
            Clock::Utc => "utc",
        };
        let output = match self.output {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        };
        vec![
            vec!["clock".into(), clock.into()],
            vec!["output".into(), output.into()],
            vec!["schedule_count".into(), self.schedule_count.to_string()],
        ]
    }
}

pub fn config_path() -> Result<PathBuf> {
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        if !p.trim().is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
    let proj = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed config at {}", path.display()))?;
    debug!(path = %path.display(), ?settings, "loaded config");
    Ok(settings)
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config dir")?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)
        .with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}
