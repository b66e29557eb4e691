//! Scenario runner wiring the projection and benefit calculations together
//!
//! Holds one set of assumptions and turns a validated employee into a flat
//! [`PensionReport`]. Each run builds its own projection state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assumptions::Assumptions;
use crate::benefits::{BenefitCalculator, BenefitComparison};
use crate::employee::{plausibility_warnings, Employee, PlausibilityWarning};
use crate::projection::{MonthRow, ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Flat result record handed to the presenter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PensionReport {
    pub retirement_date: NaiveDate,
    pub qualifying_service_years: u32,
    pub qualifying_service_months: u32,
    pub service_months_total: u32,
    pub final_basic_pay: f64,
    pub final_da_rate_percent: f64,
    pub final_emoluments: f64,
    pub comparison: BenefitComparison,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<PlausibilityWarning>,
}

impl PensionReport {
    fn new(
        projection: &ProjectionResult,
        comparison: BenefitComparison,
        warnings: Vec<PlausibilityWarning>,
    ) -> Self {
        Self {
            retirement_date: projection.retirement_date,
            qualifying_service_years: projection.qualifying_service_years(),
            qualifying_service_months: projection.qualifying_service_months(),
            service_months_total: projection.service_months_total,
            final_basic_pay: projection.final_basic_pay,
            final_da_rate_percent: projection.final_da_rate_percent,
            final_emoluments: projection.final_emoluments(),
            comparison,
            warnings,
        }
    }
}

/// Runner for full employee projections under one set of assumptions
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with default assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_pricing(),
        }
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Project and compare benefits for one employee
    pub fn run(&self, employee: &Employee) -> PensionReport {
        self.run_with(employee, ProjectionConfig::default()).0
    }

    /// Like [`run`](Self::run), also returning the monthly schedule
    pub fn run_detailed(&self, employee: &Employee) -> (PensionReport, Vec<MonthRow>) {
        self.run_with(employee, ProjectionConfig { detailed_output: true })
    }

    /// Evaluate one employee under several assumption sets
    pub fn run_scenarios(&self, employee: &Employee, scenarios: &[Assumptions]) -> Vec<PensionReport> {
        scenarios
            .iter()
            .map(|assumptions| ScenarioRunner::with_assumptions(assumptions.clone()).run(employee))
            .collect()
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }

    fn run_with(&self, employee: &Employee, config: ProjectionConfig) -> (PensionReport, Vec<MonthRow>) {
        let warnings = plausibility_warnings(employee, &self.assumptions.plausibility);
        for warning in &warnings {
            log::warn!("{}; calculation will proceed", warning);
        }

        let engine = ProjectionEngine::new(self.assumptions.clone(), config);
        let mut projection = engine.project_to_retirement(employee);
        let comparison = BenefitCalculator::new(&self.assumptions).compare(&projection);

        log::info!(
            "Retirement {}: NPS total {:.0}, UPS total {:.0} ({:?})",
            projection.retirement_date,
            comparison.nps.total_payout,
            comparison.ups.total_payout,
            comparison.verdict,
        );

        let schedule = std::mem::take(&mut projection.schedule);
        (PensionReport::new(&projection, comparison, warnings), schedule)
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
