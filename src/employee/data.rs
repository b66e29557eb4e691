//! Employee record and grade pay table

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 6th CPC grade pay, used to look up the 7th CPC entry pay of the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum GradePay {
    /// Level 10
    Gp6000,
    /// Level 11
    Gp7000,
    /// Level 12
    Gp8000,
    /// Level 13A
    Gp9000,
    /// Level 14
    Gp10000,
}

impl GradePay {
    pub const ALL: [GradePay; 5] = [
        GradePay::Gp6000,
        GradePay::Gp7000,
        GradePay::Gp8000,
        GradePay::Gp9000,
        GradePay::Gp10000,
    ];

    /// Grade pay amount as printed on the pay slip
    pub fn code(&self) -> u32 {
        match self {
            GradePay::Gp6000 => 6000,
            GradePay::Gp7000 => 7000,
            GradePay::Gp8000 => 8000,
            GradePay::Gp9000 => 9000,
            GradePay::Gp10000 => 10000,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.code() == code)
    }

    /// Pay matrix level name
    pub fn level(&self) -> &'static str {
        match self {
            GradePay::Gp6000 => "10",
            GradePay::Gp7000 => "11",
            GradePay::Gp8000 => "12",
            GradePay::Gp9000 => "13A",
            GradePay::Gp10000 => "14",
        }
    }

    /// Rationalised entry pay of the level
    pub fn entry_pay(&self) -> f64 {
        match self {
            GradePay::Gp6000 => 57_700.0,
            GradePay::Gp7000 => 68_900.0,
            GradePay::Gp8000 => 79_800.0,
            GradePay::Gp9000 => 131_400.0,
            GradePay::Gp10000 => 144_200.0,
        }
    }
}

impl fmt::Display for GradePay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for GradePay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| format!("unknown grade pay: {}", s))
    }
}

impl TryFrom<u32> for GradePay {
    type Error = String;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unknown grade pay: {}", code))
    }
}

impl From<GradePay> for u32 {
    fn from(grade: GradePay) -> Self {
        grade.code()
    }
}

/// A validated employee record, the sole input of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub date_of_birth: NaiveDate,

    pub date_of_joining: NaiveDate,

    /// Date from which `current_basic_pay` is drawn
    pub effective_pay_date: NaiveDate,

    pub current_basic_pay: f64,

    /// DA as a percentage of basic (e.g. 50.0 for 50%)
    pub current_da_rate_percent: f64,

    pub grade_pay: GradePay,
}

impl Employee {
    /// Build a record without validation; see [`RawEmployeeInput::validate`]
    ///
    /// [`RawEmployeeInput::validate`]: super::RawEmployeeInput::validate
    pub fn new(
        date_of_birth: NaiveDate,
        date_of_joining: NaiveDate,
        effective_pay_date: NaiveDate,
        current_basic_pay: f64,
        current_da_rate_percent: f64,
        grade_pay: GradePay,
    ) -> Self {
        Self {
            date_of_birth,
            date_of_joining,
            effective_pay_date,
            current_basic_pay,
            current_da_rate_percent,
            grade_pay,
        }
    }

    /// Current DA as a fraction of basic
    pub fn current_da_fraction(&self) -> f64 {
        self.current_da_rate_percent / 100.0
    }

    /// Whether the supplied pay is from the joining year
    pub fn pay_is_from_joining_year(&self) -> bool {
        self.effective_pay_date.year() == self.date_of_joining.year()
    }
}
