//! Projection output: final pay state and the optional monthly schedule

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single row of projection output for one month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRow {
    /// First day of the month
    pub month: NaiveDate,

    // Events this month
    pub revision_applied: bool,
    pub da_hike_applied: bool,
    pub increment_applied: bool,

    // Pay used for this month's contribution
    pub basic_pay: f64,
    pub da_rate_percent: f64,
    pub emoluments: f64,

    // NPS
    pub employee_contribution: f64,
    pub employer_contribution: f64,
    /// Corpus after contribution and monthly growth
    pub corpus: f64,
}

impl MonthRow {
    pub fn new(month: NaiveDate) -> Self {
        Self {
            month,
            revision_applied: false,
            da_hike_applied: false,
            increment_applied: false,
            basic_pay: 0.0,
            da_rate_percent: 0.0,
            emoluments: 0.0,
            employee_contribution: 0.0,
            employer_contribution: 0.0,
            corpus: 0.0,
        }
    }

    pub fn total_contribution(&self) -> f64 {
        self.employee_contribution + self.employer_contribution
    }
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Basic pay at retirement
    pub final_basic_pay: f64,

    /// DA at retirement, in percent
    pub final_da_rate_percent: f64,

    /// NPS corpus at retirement
    pub final_corpus: f64,

    /// Qualifying service from joining to retirement, in whole months
    pub service_months_total: u32,

    pub retirement_date: NaiveDate,

    /// Monthly rows; empty unless detailed output was requested
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedule: Vec<MonthRow>,
}

impl ProjectionResult {
    /// Last basic pay plus DA
    pub fn final_emoluments(&self) -> f64 {
        self.final_basic_pay * (1.0 + self.final_da_fraction())
    }

    pub fn final_da_fraction(&self) -> f64 {
        self.final_da_rate_percent / 100.0
    }

    /// Completed years of qualifying service
    pub fn qualifying_service_years(&self) -> u32 {
        self.service_months_total / 12
    }

    /// Months beyond the completed years
    pub fn qualifying_service_months(&self) -> u32 {
        self.service_months_total % 12
    }

    /// Add a schedule row
    pub fn add_row(&mut self, row: MonthRow) {
        self.schedule.push(row);
    }
}
