// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::models::PayoutCycle;
use crate::payout::upcoming_cycles;
use crate::utils::{
    CYCLE_HEADERS, cycle_rows, maybe_print_json, output_flags, pretty_table, reference_date,
};
use anyhow::Result;
use tracing::debug;

pub fn schedule(settings: &Settings, sub: &clap::ArgMatches) -> Result<Vec<PayoutCycle>> {
    let date = reference_date(sub.get_one::<String>("date"), settings.clock)?;
    let count = sub
        .get_one::<usize>("count")
        .copied()
        .unwrap_or(settings.schedule_count);
    debug!(%date, count, "building schedule");
    Ok(upcoming_cycles(date, count)?)
}

pub fn handle(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let cycles = schedule(settings, sub)?;
    let (json_flag, jsonl_flag) = output_flags(sub, settings);
    if !maybe_print_json(json_flag, jsonl_flag, &cycles)? {
        println!("{}", pretty_table(&CYCLE_HEADERS, cycle_rows(&cycles)));
    }
    Ok(())
}
