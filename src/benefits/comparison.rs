//! Ranking of the two schemes on their payout-horizon totals

use serde::{Deserialize, Serialize};
use std::fmt;

use super::nps::NpsBenefit;
use super::ups::UpsBenefit;

/// Which scheme pays more over the payout horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    NpsHigher,
    UpsHigher,
    Equal,
}

impl Verdict {
    /// Equal only when the totals are exactly equal
    pub fn from_totals(nps_total: f64, ups_total: f64) -> Self {
        if ups_total > nps_total {
            Verdict::UpsHigher
        } else if nps_total > ups_total {
            Verdict::NpsHigher
        } else {
            Verdict::Equal
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Verdict::NpsHigher => {
                "NPS provides a higher total payout in the first 20 years primarily due to the larger initial lumpsum."
            }
            Verdict::UpsHigher => "UPS provides a higher total payout in the first 20 years.",
            Verdict::Equal => {
                "NPS and UPS provide similar total payouts in the first 20 years (check assumptions)."
            }
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Both schemes side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitComparison {
    pub nps: NpsBenefit,
    pub ups: UpsBenefit,
    pub verdict: Verdict,
}

impl BenefitComparison {
    pub fn new(nps: NpsBenefit, ups: UpsBenefit) -> Self {
        let verdict = Verdict::from_totals(nps.total_payout, ups.total_payout);
        Self { nps, ups, verdict }
    }

    /// UPS total minus NPS total
    pub fn ups_advantage(&self) -> f64 {
        self.ups.total_payout - self.nps.total_payout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_outcomes() {
        assert_eq!(Verdict::from_totals(2.0e7, 1.5e7), Verdict::NpsHigher);
        assert_eq!(Verdict::from_totals(1.5e7, 2.0e7), Verdict::UpsHigher);
        assert_eq!(Verdict::from_totals(1.5e7, 1.5e7), Verdict::Equal);
        assert_eq!(Verdict::from_totals(0.0, 0.0), Verdict::Equal);
    }

    #[test]
    fn test_comparison_uses_totals() {
        let nps = NpsBenefit { total_payout: 100.0, ..Default::default() };
        let ups = UpsBenefit { total_payout: 250.0, ..Default::default() };
        let comparison = BenefitComparison::new(nps, ups);

        assert_eq!(comparison.verdict, Verdict::UpsHigher);
        assert_eq!(comparison.ups_advantage(), 150.0);
    }

    #[test]
    fn test_verdict_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Verdict::NpsHigher).unwrap(), "\"nps_higher\"");
    }
}
