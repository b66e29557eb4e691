//! Retirement benefit calculations for NPS and UPS
//!
//! Both schemes are driven off the same [`ProjectionResult`]:
//! - **NPS**: the corpus is split into a lumpsum and a fixed-rate annuity
//! - **UPS**: an assured pension on last basic pay with growing dearness
//!   relief, a lumpsum per completed six-month block, and gratuity
//!
//! The two totals over the payout horizon are then ranked.

mod annuity;
mod comparison;
mod nps;
mod ups;

pub use annuity::growing_payout;
pub use comparison::{BenefitComparison, Verdict};
pub use nps::NpsBenefit;
pub use ups::UpsBenefit;

use crate::assumptions::Assumptions;
use crate::projection::ProjectionResult;

/// Calculator for both schemes' benefits
pub struct BenefitCalculator<'a> {
    assumptions: &'a Assumptions,
}

impl<'a> BenefitCalculator<'a> {
    pub fn new(assumptions: &'a Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn nps(&self, projection: &ProjectionResult) -> NpsBenefit {
        NpsBenefit::from_corpus(projection.final_corpus, &self.assumptions.nps)
    }

    pub fn ups(&self, projection: &ProjectionResult) -> UpsBenefit {
        UpsBenefit::from_projection(projection, &self.assumptions.ups)
    }

    /// Compute both schemes and rank them
    pub fn compare(&self, projection: &ProjectionResult) -> BenefitComparison {
        BenefitComparison::new(self.nps(projection), self.ups(projection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn projection(months: u32, corpus: f64) -> ProjectionResult {
        ProjectionResult {
            final_basic_pay: 60_000.0,
            final_da_rate_percent: 7.0,
            final_corpus: corpus,
            service_months_total: months,
            retirement_date: NaiveDate::from_ymd_opt(2040, 1, 31).unwrap(),
            schedule: Vec::new(),
        }
    }

    #[test]
    fn test_compare_runs_both_schemes() {
        let assumptions = Assumptions::default_pricing();
        let calc = BenefitCalculator::new(&assumptions);
        let comparison = calc.compare(&projection(300, 8.0e6));

        assert_eq!(comparison.nps, calc.nps(&projection(300, 8.0e6)));
        assert!(comparison.ups.eligible);
        assert_eq!(
            comparison.verdict,
            Verdict::from_totals(comparison.nps.total_payout, comparison.ups.total_payout)
        );
    }

    #[test]
    fn test_tie_when_nothing_accrues() {
        // No contributions and short service: both totals are exactly zero
        let mut assumptions = Assumptions::default_pricing();
        assumptions.nps.employee_contribution_rate = 0.0;
        assumptions.nps.employer_contribution_rate = 0.0;
        let calc = BenefitCalculator::new(&assumptions);

        let comparison = calc.compare(&projection(100, 0.0));
        assert_eq!(comparison.nps.total_payout, 0.0);
        assert_eq!(comparison.ups.total_payout, 0.0);
        assert_eq!(comparison.verdict, Verdict::Equal);
    }
}
