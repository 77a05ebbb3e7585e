// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Quarterly payout cycle arithmetic.
//!
//! Earnings accrue over calendar quarters (activity windows) and are paid on
//! four fixed dates a year:
//!
//! | Payout date | Window paid                  |
//! |-------------|------------------------------|
//! | March 2     | Q4 (Oct 1 - Dec 31), prior year |
//! | June 1      | Q1 (Jan 1 - Mar 31)          |
//! | September 1 | Q2 (Apr 1 - Jun 30)          |
//! | December 1  | Q3 (Jul 1 - Sep 30)          |
//!
//! Every function here is pure and works on calendar dates only. Callers
//! with a timestamp should truncate it first (see [`crate::utils::parse_date`]).
//!
//! The plain functions panic only when a result would land past chrono's
//! last representable year; the `try_` variants report that as
//! [`PayoutError::OutOfRange`] instead.

use crate::error::PayoutError;
use crate::models::{ActivityWindow, PayoutAnchor, PayoutCycle, Quarter};
use chrono::{Datelike, NaiveDate};
use tracing::trace;

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, PayoutError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(PayoutError::OutOfRange { year })
}

fn supported<T>(r: Result<T, PayoutError>) -> T {
    r.unwrap_or_else(|e| panic!("{}", e))
}

/// Last calendar day of `month` (1-based) in `year`, computed as the day
/// before the first of the following month.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    match month {
        12 => NaiveDate::from_ymd_opt(year, 12, 31),
        1..=11 => NaiveDate::from_ymd_opt(year, month + 1, 1)?.pred_opt(),
        _ => None,
    }
}

pub fn try_activity_window(year: i32, quarter: Quarter) -> Result<ActivityWindow, PayoutError> {
    let start = ymd(year, quarter.first_month(), 1)?;
    let finish =
        last_day_of_month(year, quarter.last_month()).ok_or(PayoutError::OutOfRange { year })?;
    Ok(ActivityWindow {
        year,
        quarter,
        start,
        finish,
    })
}

pub fn activity_window(year: i32, quarter: Quarter) -> ActivityWindow {
    supported(try_activity_window(year, quarter))
}

// Anchor (and the year it falls in) that pays out `quarter` of `year`.
fn anchor_for(year: i32, quarter: Quarter) -> (PayoutAnchor, i32) {
    match quarter {
        Quarter::Q1 => (PayoutAnchor::June1, year),
        Quarter::Q2 => (PayoutAnchor::September1, year),
        Quarter::Q3 => (PayoutAnchor::December1, year),
        Quarter::Q4 => (PayoutAnchor::March2, year + 1),
    }
}

fn window_for_anchor(anchor: PayoutAnchor, year: i32) -> Result<ActivityWindow, PayoutError> {
    let window_year = match anchor {
        PayoutAnchor::March2 => year - 1,
        _ => year,
    };
    try_activity_window(window_year, anchor.disburses())
}

// Smallest anchor strictly after `date`, with the year it falls in.
fn next_anchor(date: NaiveDate) -> Result<(PayoutAnchor, i32), PayoutError> {
    let year = date.year();
    for anchor in PayoutAnchor::ALL {
        let at = anchor_date(anchor, year)?;
        if date < at {
            trace!(%date, %at, "next payout in same year");
            return Ok((anchor, year));
        }
    }
    trace!(%date, "on or after December 1, rolling into next year");
    Ok((PayoutAnchor::March2, year + 1))
}

fn anchor_date(anchor: PayoutAnchor, year: i32) -> Result<NaiveDate, PayoutError> {
    anchor.in_year(year).ok_or(PayoutError::OutOfRange { year })
}

pub fn try_next_payout_date(date: NaiveDate) -> Result<NaiveDate, PayoutError> {
    let (anchor, year) = next_anchor(date)?;
    anchor_date(anchor, year)
}

/// Next payout date strictly after `date`. A date that is itself a payout
/// date rolls forward to the following one.
pub fn next_payout_date(date: NaiveDate) -> NaiveDate {
    supported(try_next_payout_date(date))
}

pub fn try_next_payout_activity_window(date: NaiveDate) -> Result<ActivityWindow, PayoutError> {
    let (anchor, year) = next_anchor(date)?;
    window_for_anchor(anchor, year)
}

/// Activity window disbursed on [`next_payout_date`].
pub fn next_payout_activity_window(date: NaiveDate) -> ActivityWindow {
    supported(try_next_payout_activity_window(date))
}

pub fn try_current_cycle_activity_window(date: NaiveDate) -> Result<ActivityWindow, PayoutError> {
    try_activity_window(date.year(), Quarter::of(date))
}

/// Calendar quarter containing `date`.
pub fn current_cycle_activity_window(date: NaiveDate) -> ActivityWindow {
    supported(try_current_cycle_activity_window(date))
}

pub fn try_payout_date_for_window(window: &ActivityWindow) -> Result<NaiveDate, PayoutError> {
    let (anchor, year) = anchor_for(window.year, window.quarter);
    anchor_date(anchor, year)
}

pub fn payout_date_for_window(window: &ActivityWindow) -> NaiveDate {
    supported(try_payout_date_for_window(window))
}

/// Window paid out on `date`, or `None` if `date` is not a payout date.
pub fn window_for_payout_date(date: NaiveDate) -> Option<ActivityWindow> {
    let anchor = PayoutAnchor::of(date)?;
    window_for_anchor(anchor, date.year()).ok()
}

pub fn try_current_cycle_payout_date(date: NaiveDate) -> Result<NaiveDate, PayoutError> {
    try_payout_date_for_window(&try_current_cycle_activity_window(date)?)
}

/// Payout date for the quarter currently accruing. Q4 is paid the next year.
pub fn current_cycle_payout_date(date: NaiveDate) -> NaiveDate {
    supported(try_current_cycle_payout_date(date))
}

pub fn next_payout_cycle(date: NaiveDate) -> Result<PayoutCycle, PayoutError> {
    let (anchor, year) = next_anchor(date)?;
    Ok(PayoutCycle {
        window: window_for_anchor(anchor, year)?,
        payout_date: anchor_date(anchor, year)?,
    })
}

pub fn current_payout_cycle(date: NaiveDate) -> Result<PayoutCycle, PayoutError> {
    let window = try_current_cycle_activity_window(date)?;
    let payout_date = try_payout_date_for_window(&window)?;
    Ok(PayoutCycle {
        window,
        payout_date,
    })
}

/// The next `count` cycles after `date`, ordered by payout date.
pub fn upcoming_cycles(date: NaiveDate, count: usize) -> Result<Vec<PayoutCycle>, PayoutError> {
    // `count` comes from the command line; grow as we go.
    let mut out = Vec::new();
    let mut cursor = date;
    for _ in 0..count {
        let cycle = next_payout_cycle(cursor)?;
        cursor = cycle.payout_date;
        out.push(cycle);
    }
    Ok(out)
}

/// Cycles whose payout date falls within `from..=to`.
pub fn cycles_between(from: NaiveDate, to: NaiveDate) -> Result<Vec<PayoutCycle>, PayoutError> {
    let mut out = Vec::new();
    if from > to {
        return Ok(out);
    }
    // Jan 1 is never a payout date, so starting at `from` itself is safe when
    // there is no previous day.
    let mut cursor = from.pred_opt().unwrap_or(from);
    loop {
        let cycle = next_payout_cycle(cursor)?;
        if cycle.payout_date > to {
            break;
        }
        cursor = cycle.payout_date;
        out.push(cycle);
    }
    Ok(out)
}
