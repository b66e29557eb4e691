//! Core projection engine stepping pay, DA and NPS corpus month by month

use chrono::{Datelike, NaiveDate};

use super::schedule::{MonthRow, ProjectionResult};
use super::state::ProjectionState;
use crate::assumptions::Assumptions;
use crate::calendar::{months_between, retirement_date, MonthIter};
use crate::employee::Employee;

const JANUARY: u32 = 1;
const JULY: u32 = 7;

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Whether to record a row per simulated month
    pub detailed_output: bool,
}

/// Main projection engine
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Retirement date under the configured superannuation age
    pub fn retirement_date(&self, employee: &Employee) -> NaiveDate {
        retirement_date(employee.date_of_birth, self.assumptions.retirement_age_years)
    }

    /// Run projection to the employee's superannuation date
    pub fn project_to_retirement(&self, employee: &Employee) -> ProjectionResult {
        self.project(employee, self.retirement_date(employee))
    }

    /// Run projection from the effective pay date through the month containing
    /// `retirement_date`
    pub fn project(&self, employee: &Employee, retirement_date: NaiveDate) -> ProjectionResult {
        let mut state = ProjectionState::from_employee(employee);
        let mut result = ProjectionResult {
            final_basic_pay: state.basic_pay,
            final_da_rate_percent: state.da_rate * 100.0,
            final_corpus: 0.0,
            service_months_total: months_between(employee.date_of_joining, retirement_date),
            retirement_date,
            schedule: Vec::new(),
        };

        log::debug!(
            "Starting projection: DOJ={}, retire={}, effective={}, basic={}, DA={}%, GP={}",
            employee.date_of_joining,
            retirement_date,
            employee.effective_pay_date,
            employee.current_basic_pay,
            employee.current_da_rate_percent,
            employee.grade_pay,
        );

        for month in MonthIter::new(employee.effective_pay_date, retirement_date) {
            state.enter_month(month);
            let row = self.calculate_month(employee, &mut state);
            if self.config.detailed_output {
                result.add_row(row);
            }
        }

        log::debug!(
            "Projection end after {} months: basic={:.0}, DA={:.2}%, corpus={:.0}",
            state.months_simulated,
            state.basic_pay,
            state.da_rate * 100.0,
            state.corpus,
        );

        result.final_basic_pay = state.basic_pay;
        result.final_da_rate_percent = state.da_rate * 100.0;
        result.final_corpus = state.corpus;
        result
    }

    /// Apply one month's rules in order: revision, DA hike, contribution,
    /// compounding, increment
    fn calculate_month(&self, employee: &Employee, state: &mut ProjectionState) -> MonthRow {
        let pay = &self.assumptions.pay;
        let nps = &self.assumptions.nps;
        let year = state.sim_date.year();
        let month = state.sim_date.month();
        let mut row = MonthRow::new(state.sim_date);

        // A revision in the effective year is already in the supplied pay
        if month == JANUARY
            && pay.revision_years.contains(year)
            && year > employee.effective_pay_date.year()
        {
            state.basic_pay *= 1.0 + pay.revision_increase_rate;
            state.da_rate = 0.0;
            row.revision_applied = true;
            log::debug!("Pay revision Jan {}: basic={:.0}, DA reset to 0%", year, state.basic_pay);
        }

        if month == JANUARY || month == JULY {
            state.da_rate += pay.da_hike_fraction();
            row.da_hike_applied = true;
            log::trace!("DA hike {}-{:02}: rate={:.2}%", year, month, state.da_rate * 100.0);
        }

        row.basic_pay = state.basic_pay;
        row.da_rate_percent = state.da_rate * 100.0;

        if state.in_service(employee.date_of_joining) {
            let emoluments = state.emoluments();
            row.emoluments = emoluments;
            row.employee_contribution = emoluments * nps.employee_contribution_rate;
            row.employer_contribution = emoluments * nps.employer_contribution_rate;

            state.corpus += row.total_contribution();
            state.corpus *= nps.monthly_growth_factor();
        }
        row.corpus = state.corpus;

        // Increment takes effect after July's contribution
        if month == JULY {
            state.basic_pay *= 1.0 + pay.annual_increment_rate;
            row.increment_applied = true;
            log::trace!("Increment July {}: basic={:.0}", year, state.basic_pay);
        }

        row
    }
}
