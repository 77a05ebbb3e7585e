// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::PayoutError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn of(date: NaiveDate) -> Quarter {
        match date.month() {
            1..=3 => Quarter::Q1,
            4..=6 => Quarter::Q2,
            7..=9 => Quarter::Q3,
            _ => Quarter::Q4,
        }
    }

    pub fn first_month(self) -> u32 {
        self.last_month() - 2
    }

    pub fn last_month(self) -> u32 {
        match self {
            Quarter::Q1 => 3,
            Quarter::Q2 => 6,
            Quarter::Q3 => 9,
            Quarter::Q4 => 12,
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        };
        f.write_str(s)
    }
}

impl FromStr for Quarter {
    type Err = PayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let digits = t
            .strip_prefix('Q')
            .or_else(|| t.strip_prefix('q'))
            .unwrap_or(t);
        match digits {
            "1" => Ok(Quarter::Q1),
            "2" => Ok(Quarter::Q2),
            "3" => Ok(Quarter::Q3),
            "4" => Ok(Quarter::Q4),
            _ => Err(PayoutError::InvalidQuarter {
                input: s.to_string(),
            }),
        }
    }
}

/// Fixed month/day on which a payout is disbursed, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PayoutAnchor {
    March2,
    June1,
    September1,
    December1,
}

impl PayoutAnchor {
    pub const ALL: [PayoutAnchor; 4] = [
        PayoutAnchor::March2,
        PayoutAnchor::June1,
        PayoutAnchor::September1,
        PayoutAnchor::December1,
    ];

    pub fn month(self) -> u32 {
        match self {
            PayoutAnchor::March2 => 3,
            PayoutAnchor::June1 => 6,
            PayoutAnchor::September1 => 9,
            PayoutAnchor::December1 => 12,
        }
    }

    pub fn day(self) -> u32 {
        match self {
            PayoutAnchor::March2 => 2,
            _ => 1,
        }
    }

    pub fn in_year(self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
    }

    pub fn of(date: NaiveDate) -> Option<PayoutAnchor> {
        Self::ALL
            .into_iter()
            .find(|a| a.month() == date.month() && a.day() == date.day())
    }

    /// Quarter whose earnings this anchor disburses. March 2 pays the
    /// previous year's Q4.
    pub fn disburses(self) -> Quarter {
        match self {
            PayoutAnchor::March2 => Quarter::Q4,
            PayoutAnchor::June1 => Quarter::Q1,
            PayoutAnchor::September1 => Quarter::Q2,
            PayoutAnchor::December1 => Quarter::Q3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityWindow {
    pub year: i32,
    pub quarter: Quarter,
    pub start: NaiveDate,
    pub finish: NaiveDate,
}

impl ActivityWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.finish
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.year, self.quarter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayoutCycle {
    pub window: ActivityWindow,
    pub payout_date: NaiveDate,
}

impl PayoutCycle {
    pub fn payout_anchor(&self) -> Option<PayoutAnchor> {
        PayoutAnchor::of(self.payout_date)
    }
}
