// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use payoutcal::config::{OutputFormat, Settings};
use payoutcal::{cli, commands::cycles, commands::schedule, utils};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    match matches.subcommand() {
        Some((_, sub)) => sub.clone(),
        None => panic!("no subcommand in {:?}", args),
    }
}

#[test]
fn next_reports_payout_and_window() {
    let settings = Settings::default();
    let sub = sub_matches(&["payoutcal", "next", "--date", "2024-07-04"]);
    let report = cycles::next_report(&settings, &sub).unwrap();
    assert_eq!(report.reference_date, d(2024, 7, 4));
    assert_eq!(report.cycle.payout_date, d(2024, 9, 1));
    assert_eq!(report.cycle.window.label(), "2024-Q2");

    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["reference_date"], "2024-07-04");
    assert_eq!(v["payout_date"], "2024-09-01");
    assert_eq!(v["window"]["start"], "2024-04-01");
}

#[test]
fn current_reports_accruing_quarter() {
    let settings = Settings::default();
    let sub = sub_matches(&["payoutcal", "current", "--date", "2024-11-11"]);
    let report = cycles::current_report(&settings, &sub).unwrap();
    assert_eq!(report.cycle.window.label(), "2024-Q4");
    assert_eq!(report.cycle.payout_date, d(2025, 3, 2));
}

#[test]
fn current_without_date_uses_today() {
    let settings = Settings::default();
    let sub = sub_matches(&["payoutcal", "current"]);
    let report = cycles::current_report(&settings, &sub).unwrap();
    assert_eq!(report.reference_date, utils::today(settings.clock));
    assert!(report.cycle.window.contains(report.reference_date));
}

#[test]
fn bad_date_surfaces_as_error() {
    let settings = Settings::default();
    let sub = sub_matches(&["payoutcal", "next", "--date", "next tuesday"]);
    let err = cycles::next_report(&settings, &sub).unwrap_err();
    assert!(err.to_string().contains("next tuesday"));
    assert!(cycles::handle_next(&settings, &sub).is_err());
}

#[test]
fn quarter_lookup() {
    let sub = sub_matches(&["payoutcal", "quarter", "2023-Q4"]);
    let cycle = cycles::quarter_cycle(&sub).unwrap();
    assert_eq!(cycle.window.start, d(2023, 10, 1));
    assert_eq!(cycle.window.finish, d(2023, 12, 31));
    assert_eq!(cycle.payout_date, d(2024, 3, 2));

    let sub = sub_matches(&["payoutcal", "quarter", "2023-Q9"]);
    assert!(cycles::quarter_cycle(&sub).is_err());
}

#[test]
fn quarter_and_date_accept_the_same_years() {
    let settings = Settings::default();
    let sub = sub_matches(&["payoutcal", "next", "--date", "+10000-01-01"]);
    let report = cycles::next_report(&settings, &sub).unwrap();
    assert_eq!(report.cycle.window.label(), "9999-Q4");

    let sub = sub_matches(&["payoutcal", "quarter", "10000-Q1"]);
    let cycle = cycles::quarter_cycle(&sub).unwrap();
    assert_eq!(cycle.payout_date, d(10000, 6, 1));

    // Past the calendar's end the window itself cannot be built.
    let sub = sub_matches(&["payoutcal", "quarter", "999999-Q1"]);
    let err = cycles::quarter_cycle(&sub).unwrap_err();
    assert!(err.to_string().contains("outside the supported calendar range"));
}

#[test]
fn schedule_count_falls_back_to_settings() {
    let settings = Settings {
        schedule_count: 2,
        ..Settings::default()
    };
    let sub = sub_matches(&["payoutcal", "schedule", "--date", "2024-06-01"]);
    let cycles = schedule::schedule(&settings, &sub).unwrap();
    let dates: Vec<NaiveDate> = cycles.iter().map(|c| c.payout_date).collect();
    assert_eq!(dates, vec![d(2024, 9, 1), d(2024, 12, 1)]);

    let sub = sub_matches(&["payoutcal", "schedule", "--date", "2024-06-01", "--count", "6"]);
    let cycles = schedule::schedule(&settings, &sub).unwrap();
    assert_eq!(cycles.len(), 6);
    assert_eq!(cycles[2].payout_date, d(2025, 3, 2));
    assert_eq!(cycles[2].window.label(), "2024-Q4");
    assert_eq!(cycles[5].payout_date, d(2025, 12, 1));
    assert_eq!(cycles[5].window.label(), "2025-Q3");
}

#[test]
fn output_flags_follow_config_unless_overridden() {
    let settings = Settings {
        output: OutputFormat::Jsonl,
        ..Settings::default()
    };
    let sub = sub_matches(&["payoutcal", "schedule"]);
    assert_eq!(utils::output_flags(&sub, &settings), (false, true));

    let sub = sub_matches(&["payoutcal", "schedule", "--json"]);
    assert_eq!(utils::output_flags(&sub, &settings), (true, false));

    let sub = sub_matches(&["payoutcal", "--json", "next"]);
    assert_eq!(utils::output_flags(&sub, &Settings::default()), (true, false));
}
