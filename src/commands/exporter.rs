// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::payout::cycles_between;
use crate::utils::{cycle_rows, parse_date};
use anyhow::{Context, Result, bail};
use tracing::info;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim();
    let from = parse_date(sub.get_one::<String>("from").unwrap())?;
    let to = parse_date(sub.get_one::<String>("to").unwrap())?;

    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }
    if from > to {
        bail!("--from {} is after --to {}", from, to);
    }

    let cycles = cycles_between(from, to)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr =
                csv::Writer::from_path(out).with_context(|| format!("Create {}", out))?;
            wtr.write_record(["payout_date", "window", "start", "finish"])?;
            for row in cycle_rows(&cycles) {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(out, serde_json::to_string_pretty(&cycles)?)
                .with_context(|| format!("Write {}", out))?;
        }
    }
    info!(count = cycles.len(), %from, %to, "exported cycles");
    println!("Exported {} payout cycles to {}", cycles.len(), out);
    Ok(())
}
