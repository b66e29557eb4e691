//! NPS payout: lumpsum withdrawal plus a fixed annuity

use serde::{Deserialize, Serialize};

use crate::assumptions::NpsAssumptions;

/// NPS benefits at retirement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NpsBenefit {
    pub corpus: f64,
    pub lumpsum: f64,
    pub annuity_corpus: f64,
    /// Fixed for life; no DR on annuities
    pub monthly_pension: f64,
    pub pension_payout: f64,
    /// Lumpsum plus pension over the payout horizon
    pub total_payout: f64,
}

impl NpsBenefit {
    pub fn from_corpus(corpus: f64, terms: &NpsAssumptions) -> Self {
        let lumpsum = corpus * terms.lumpsum_share;
        let annuity_corpus = corpus * (1.0 - terms.lumpsum_share);
        let monthly_pension = annuity_corpus * terms.annuity_rate / 12.0;
        let pension_payout = monthly_pension * (terms.payout_years * 12) as f64;

        Self {
            corpus,
            lumpsum,
            annuity_corpus,
            monthly_pension,
            pension_payout,
            total_payout: lumpsum + pension_payout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_split() {
        let nps = NpsBenefit::from_corpus(10_000_000.0, &NpsAssumptions::default());

        assert_relative_eq!(nps.lumpsum, 6_000_000.0);
        assert_relative_eq!(nps.annuity_corpus, 4_000_000.0);
        assert_relative_eq!(nps.monthly_pension, 4_000_000.0 * 0.065 / 12.0);
        assert_relative_eq!(nps.pension_payout, nps.monthly_pension * 240.0);
        assert_relative_eq!(nps.total_payout, 6_000_000.0 + 5_200_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_corpus() {
        let nps = NpsBenefit::from_corpus(0.0, &NpsAssumptions::default());
        assert_eq!(nps, NpsBenefit::default());
    }
}
