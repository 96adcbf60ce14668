// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

use crate::stats::MostPopularInsights;

/// Body of `sites/{id}/stats/insights/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MostPopularDto {
    pub highest_day_of_week: Option<i64>,
    pub highest_hour: Option<i64>,
    pub highest_day_percent: Option<f64>,
    pub highest_hour_percent: Option<f64>,
}

impl MostPopularDto {
    pub fn to_data_model(&self) -> MostPopularInsights {
        MostPopularInsights {
            highest_day_of_week: self.highest_day_of_week.unwrap_or(0),
            highest_hour: self.highest_hour.unwrap_or(0),
            highest_day_percent: self.highest_day_percent.unwrap_or(0.0),
            highest_hour_percent: self.highest_hour_percent.unwrap_or(0.0),
        }
    }
}
