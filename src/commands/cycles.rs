// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::models::PayoutCycle;
use crate::payout;
use crate::utils::{
    CYCLE_HEADERS, cycle_rows, maybe_print_json, output_flags, parse_quarter, pretty_table,
    reference_date,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub reference_date: NaiveDate,
    #[serde(flatten)]
    pub cycle: PayoutCycle,
}

pub fn next_report(settings: &Settings, sub: &clap::ArgMatches) -> Result<CycleReport> {
    let date = reference_date(sub.get_one::<String>("date"), settings.clock)?;
    let cycle = payout::next_payout_cycle(date)
        .with_context(|| format!("No next payout for {}", date))?;
    info!(%date, payout = %cycle.payout_date, window = %cycle.window.label(), "next payout");
    Ok(CycleReport {
        reference_date: date,
        cycle,
    })
}

pub fn current_report(settings: &Settings, sub: &clap::ArgMatches) -> Result<CycleReport> {
    let date = reference_date(sub.get_one::<String>("date"), settings.clock)?;
    let cycle = payout::current_payout_cycle(date)
        .with_context(|| format!("No current cycle for {}", date))?;
    info!(%date, payout = %cycle.payout_date, window = %cycle.window.label(), "current cycle");
    Ok(CycleReport {
        reference_date: date,
        cycle,
    })
}

pub fn quarter_cycle(sub: &clap::ArgMatches) -> Result<PayoutCycle> {
    let raw = sub.get_one::<String>("QUARTER").unwrap();
    let (year, quarter) = parse_quarter(raw)?;
    let window = payout::try_activity_window(year, quarter)?;
    let payout_date = payout::try_payout_date_for_window(&window)?;
    Ok(PayoutCycle {
        window,
        payout_date,
    })
}

fn print_report(settings: &Settings, sub: &clap::ArgMatches, report: &CycleReport) -> Result<()> {
    let (json_flag, jsonl_flag) = output_flags(sub, settings);
    if !maybe_print_json(json_flag, jsonl_flag, report)? {
        println!("As of {}", report.reference_date);
        println!(
            "{}",
            pretty_table(&CYCLE_HEADERS, cycle_rows(std::slice::from_ref(&report.cycle)))
        );
    }
    Ok(())
}

pub fn handle_next(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let report = next_report(settings, sub)?;
    print_report(settings, sub, &report)
}

pub fn handle_current(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let report = current_report(settings, sub)?;
    print_report(settings, sub, &report)
}

pub fn handle_quarter(settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let cycle = quarter_cycle(sub)?;
    let (json_flag, jsonl_flag) = output_flags(sub, settings);
    if !maybe_print_json(json_flag, jsonl_flag, &cycle)? {
        println!(
            "{}",
            pretty_table(&CYCLE_HEADERS, cycle_rows(std::slice::from_ref(&cycle)))
        );
    }
    Ok(())
}
