//! UPS payout: assured pension, Reg 14 lumpsum and gratuity

use serde::{Deserialize, Serialize};

use super::annuity::growing_payout;
use crate::assumptions::UpsAssumptions;
use crate::projection::ProjectionResult;

/// UPS benefits at retirement; all zero when not eligible
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpsBenefit {
    pub eligible: bool,
    /// Assured pension before dearness relief
    pub assured_monthly_pension: f64,
    pub guaranteed_lumpsum: f64,
    /// Alternative lumpsum, approximated by the NPS lumpsum share of the corpus
    pub optional_lumpsum: f64,
    pub gratuity: f64,
    /// Pension with growing DR over the payout horizon
    pub pension_payout: f64,
    pub total_payout: f64,
}

impl UpsBenefit {
    pub fn from_projection(projection: &ProjectionResult, terms: &UpsAssumptions) -> Self {
        let months = projection.service_months_total;
        if !terms.is_eligible(months) {
            return Self::default();
        }

        let emoluments = projection.final_emoluments();

        // Proportionate below full service, then the minimum guarantee
        let full_months = terms.full_pension_months.max(1);
        let proportion = months.min(full_months) as f64 / full_months as f64;
        let assured_monthly_pension =
            (projection.final_basic_pay / 2.0 * proportion).max(terms.minimum_pension);

        let blocks = months / terms.lumpsum_block_months.max(1);
        let guaranteed_lumpsum = emoluments / 10.0 * blocks as f64;

        let optional_lumpsum = projection.final_corpus * terms.optional_lumpsum_share;

        let gratuity = (emoluments / 4.0 * projection.qualifying_service_years() as f64)
            .min(terms.gratuity_ceiling);

        let pension_payout = growing_payout(
            assured_monthly_pension,
            projection.final_da_fraction(),
            terms.post_retirement_dr_growth,
            terms.payout_years,
        );

        Self {
            eligible: true,
            assured_monthly_pension,
            guaranteed_lumpsum,
            optional_lumpsum,
            gratuity,
            pension_payout,
            total_payout: guaranteed_lumpsum + gratuity + pension_payout,
        }
    }
}
