// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Quarterly payout cycle calculator.
//!
//! The calculator functions take an explicit reference date. To ask about
//! "now", pass [`utils::today`] with the clock you want:
//!
//! ```
//! use payoutcal::{config::Clock, next_payout_date, utils::today};
//!
//! let now = today(Clock::Utc);
//! assert!(next_payout_date(now) > now);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod payout;
pub mod utils;
pub mod commands;

pub use error::PayoutError;
pub use models::{ActivityWindow, PayoutAnchor, PayoutCycle, Quarter};
pub use payout::{
    current_cycle_activity_window, current_cycle_payout_date, next_payout_activity_window,
    next_payout_date,
};
