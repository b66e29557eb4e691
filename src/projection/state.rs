//! Pay and corpus state of one employee during a projection

use crate::calendar::month_start;
use crate::employee::Employee;
use chrono::NaiveDate;

/// State at a point in time during projection
///
/// Owned by a single engine run; never shared between runs.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// First day of the month being simulated
    pub sim_date: NaiveDate,

    /// Basic pay in force
    pub basic_pay: f64,

    /// DA as a fraction of basic (0.5 = 50%)
    pub da_rate: f64,

    /// NPS corpus accumulated so far
    pub corpus: f64,

    /// Number of months stepped so far
    pub months_simulated: u32,
}

impl ProjectionState {
    /// Initialize from the employee's pay at the effective pay date
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            sim_date: month_start(employee.effective_pay_date),
            basic_pay: employee.current_basic_pay,
            da_rate: employee.current_da_fraction(),
            corpus: 0.0,
            months_simulated: 0,
        }
    }

    /// Move to the month starting on `month`
    pub fn enter_month(&mut self, month: NaiveDate) {
        self.sim_date = month;
        self.months_simulated += 1;
    }

    /// Basic pay plus DA
    pub fn emoluments(&self) -> f64 {
        self.basic_pay * (1.0 + self.da_rate)
    }

    /// Whether the simulated month has reached the date of joining
    pub fn in_service(&self, date_of_joining: NaiveDate) -> bool {
        self.sim_date >= date_of_joining
    }
}
