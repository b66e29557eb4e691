//! Scheme terms for NPS (defined contribution) and UPS (assured payout)

use serde::{Deserialize, Serialize};

/// NPS contribution, growth and payout terms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NpsAssumptions {
    /// Employee share of monthly emoluments
    pub employee_contribution_rate: f64,

    /// Government share of monthly emoluments
    pub employer_contribution_rate: f64,

    /// Assumed annual return on the corpus, compounded monthly
    pub assumed_annual_return: f64,

    /// Annuity rate on the annuitised part of the corpus (p.a.)
    pub annuity_rate: f64,

    /// Share of the corpus withdrawn as lumpsum at retirement
    pub lumpsum_share: f64,

    /// Payout horizon used for the comparison total
    pub payout_years: u32,
}

impl Default for NpsAssumptions {
    fn default() -> Self {
        Self {
            employee_contribution_rate: 0.10,
            employer_contribution_rate: 0.14,
            assumed_annual_return: 0.09,
            annuity_rate: 0.065,
            lumpsum_share: 0.60,
            payout_years: 20,
        }
    }
}

impl NpsAssumptions {
    /// Combined contribution as a fraction of emoluments
    pub fn total_contribution_rate(&self) -> f64 {
        self.employee_contribution_rate + self.employer_contribution_rate
    }

    /// Monthly growth factor applied to the corpus
    pub fn monthly_growth_factor(&self) -> f64 {
        1.0 + self.assumed_annual_return / 12.0
    }
}

/// UPS eligibility, pension, lumpsum and gratuity terms
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpsAssumptions {
    /// Minimum qualifying service for any UPS benefit
    pub min_qualifying_months: u32,

    /// Service at which the full 50% of last basic is paid
    pub full_pension_months: u32,

    /// Minimum assured monthly pension
    pub minimum_pension: f64,

    /// Length of a completed service block for the lumpsum (Reg 14)
    pub lumpsum_block_months: u32,

    /// Share of the NPS corpus used for the optional lumpsum
    pub optional_lumpsum_share: f64,

    /// Statutory ceiling on gratuity
    pub gratuity_ceiling: f64,

    /// Annual growth assumed for dearness relief after retirement
    pub post_retirement_dr_growth: f64,

    /// Payout horizon used for the comparison total
    pub payout_years: u32,
}

impl Default for UpsAssumptions {
    fn default() -> Self {
        Self {
            min_qualifying_months: 120, // 10 years
            full_pension_months: 300,   // 25 years
            minimum_pension: 10_000.0,
            lumpsum_block_months: 6,
            optional_lumpsum_share: 0.60,
            gratuity_ceiling: 2_000_000.0, // 20 lakh
            post_retirement_dr_growth: 0.03,
            payout_years: 20,
        }
    }
}

impl UpsAssumptions {
    pub fn is_eligible(&self, service_months: u32) -> bool {
        service_months >= self.min_qualifying_months
    }
}
