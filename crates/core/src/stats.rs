// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Revenue stats and stats insights types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Granularity of a revenue stats request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsInterval {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl StatsInterval {
    /// Returns the string representation used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsInterval::Hour => "hour",
            StatsInterval::Day => "day",
            StatsInterval::Week => "week",
            StatsInterval::Month => "month",
            StatsInterval::Year => "year",
        }
    }
}

impl fmt::Display for StatsInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatsInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(StatsInterval::Hour),
            "day" => Ok(StatsInterval::Day),
            "week" => Ok(StatsInterval::Week),
            "month" => Ok(StatsInterval::Month),
            "year" => Ok(StatsInterval::Year),
            _ => Err(Error::InvalidInterval(s.to_string())),
        }
    }
}

/// A cached revenue stats response for one site, interval and date range.
///
/// `data` and `total` hold the raw JSON returned by the server so the UI
/// layer can decode whichever fields it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueStats {
    /// Local row id; zero until stored.
    pub id: i64,
    pub local_site_id: i64,
    pub interval: StatsInterval,
    pub start_date: String,
    pub end_date: String,
    pub data: String,
    pub total: String,
}

/// "Most popular" insight for a site: the busiest weekday and hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MostPopularInsights {
    /// Zero-based day of week, Monday first.
    pub highest_day_of_week: i64,
    /// Hour of day, 0 to 23.
    pub highest_hour: i64,
    pub highest_day_percent: f64,
    pub highest_hour_percent: f64,
}
