// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{Clock, OutputFormat, Settings};
use crate::error::PayoutError;
use crate::models::{PayoutCycle, Quarter};
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use comfy_table::{Cell, Table, presets::UTF8_FULL};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a reference date. Datetimes are cut down to the calendar date as
/// written, so `2024-03-02T23:59:59-05:00` is March 2.
pub fn parse_date(s: &str) -> Result<NaiveDate, PayoutError> {
    let t = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(t, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Ok(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(t, fmt) {
            return Ok(dt.date());
        }
    }
    Err(PayoutError::InvalidDate {
        input: s.to_string(),
    })
}

/// Parse `YYYY-Qn`, e.g. `2024-Q3`. Any year `parse_date` accepts is allowed.
pub fn parse_quarter(s: &str) -> Result<(i32, Quarter), PayoutError> {
    let invalid = || PayoutError::InvalidQuarter {
        input: s.to_string(),
    };
    // Split on the last dash so signed years like `-0044-Q1` parse; the year
    // range itself is checked when the window is built.
    let (y, q) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
    let year: i32 = y.parse().map_err(|_| invalid())?;
    let quarter = q.parse::<Quarter>().map_err(|_| invalid())?;
    Ok((year, quarter))
}

pub fn today(clock: Clock) -> NaiveDate {
    match clock {
        Clock::Local => Local::now().date_naive(),
        Clock::Utc => Utc::now().date_naive(),
    }
}

/// The `--date` argument if given, otherwise today on the configured clock.
pub fn reference_date(arg: Option<&String>, clock: Clock) -> Result<NaiveDate, PayoutError> {
    match arg {
        Some(s) => parse_date(s),
        None => Ok(today(clock)),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub const CYCLE_HEADERS: [&str; 4] = ["Payout date", "Window", "Start", "Finish"];

pub fn cycle_rows(cycles: &[PayoutCycle]) -> Vec<Vec<String>> {
    cycles
        .iter()
        .map(|c| {
            vec![
                c.payout_date.to_string(),
                c.window.label(),
                c.window.start.to_string(),
                c.window.finish.to_string(),
            ]
        })
        .collect()
}

/// Resolve the `--json`/`--jsonl` flags against the configured default.
pub fn output_flags(sub: &clap::ArgMatches, settings: &Settings) -> (bool, bool) {
    let json = sub.get_flag("json");
    let jsonl = sub.get_flag("jsonl");
    if json || jsonl {
        return (json, jsonl);
    }
    match settings.output {
        OutputFormat::Table => (false, false),
        OutputFormat::Json => (true, false),
        OutputFormat::Jsonl => (false, true),
    }
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
