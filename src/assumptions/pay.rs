//! Pay progression assumptions: increments, DA hikes and pay revisions

use serde::{Deserialize, Serialize};

/// Years in which a pay commission revision takes effect (1 January)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<i32>", into = "Vec<i32>")]
pub struct RevisionSchedule {
    years: Vec<i32>,
}

impl RevisionSchedule {
    /// Create from an explicit list of years
    pub fn from_years(years: impl IntoIterator<Item = i32>) -> Self {
        let mut years: Vec<i32> = years.into_iter().collect();
        years.sort_unstable();
        years.dedup();
        Self { years }
    }

    /// Arithmetic schedule `base, base + interval, ...` up to and including `last`
    pub fn every(base: i32, interval: u32, last: i32) -> Self {
        let step = interval.max(1) as usize;
        Self::from_years((base..=last).step_by(step))
    }

    /// Schedule with no revisions at all
    pub fn none() -> Self {
        Self { years: Vec::new() }
    }

    /// 7th CPC (2016) onwards, one commission per decade
    pub fn default_decadal() -> Self {
        Self::every(2016, 10, 2056)
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }
}

impl From<Vec<i32>> for RevisionSchedule {
    fn from(years: Vec<i32>) -> Self {
        Self::from_years(years)
    }
}

impl From<RevisionSchedule> for Vec<i32> {
    fn from(schedule: RevisionSchedule) -> Self {
        schedule.years
    }
}

impl Default for RevisionSchedule {
    fn default() -> Self {
        Self::default_decadal()
    }
}

/// Pay growth while in service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PayAssumptions {
    /// Annual increment on basic pay, applied every July
    pub annual_increment_rate: f64,

    /// DA rise in percentage points at each January and July hike
    pub da_hike_points: f64,

    /// Basic pay uplift when a revision takes effect
    pub revision_increase_rate: f64,

    /// Revision years; DA resets to zero in each
    pub revision_years: RevisionSchedule,
}

impl Default for PayAssumptions {
    fn default() -> Self {
        Self {
            annual_increment_rate: 0.03,  // 3%
            da_hike_points: 3.5,          // 3.5 points per hike
            revision_increase_rate: 0.20, // 20% fitment
            revision_years: RevisionSchedule::default_decadal(),
        }
    }
}

impl PayAssumptions {
    /// DA hike as a fraction of basic pay
    pub fn da_hike_fraction(&self) -> f64 {
        self.da_hike_points / 100.0
    }
}
