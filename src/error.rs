// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayoutError {
    #[error("Invalid date '{input}', expected YYYY-MM-DD or an RFC 3339 datetime")]
    InvalidDate { input: String },

    #[error("Invalid quarter '{input}', expected YYYY-Qn")]
    InvalidQuarter { input: String },

    #[error("Year {year} is outside the supported calendar range")]
    OutOfRange { year: i32 },

    #[error("Config error: {0}")]
    Config(String),
}
