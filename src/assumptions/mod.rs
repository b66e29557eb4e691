//! Policy constants for pay growth, scheme terms and input plausibility
//!
//! Everything the engine and benefit formulas treat as a rule lives here so
//! scenarios can override it without touching the calculation code.

mod pay;
mod schemes;

pub use pay::{PayAssumptions, RevisionSchedule};
pub use schemes::{NpsAssumptions, UpsAssumptions};

use crate::error::{read_json, LoadError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thresholds for the advisory grade-pay checks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlausibilityAssumptions {
    /// Basic pay below `entry pay * tolerance` in the joining year is flagged
    pub entry_pay_tolerance: f64,

    /// Basic pay considered very low for a senior grade
    pub very_low_basic: f64,

    /// Entry pay above which a grade counts as senior
    pub senior_entry_pay: f64,
}

impl Default for PlausibilityAssumptions {
    fn default() -> Self {
        Self {
            entry_pay_tolerance: 1.0,
            very_low_basic: 20_000.0,
            senior_entry_pay: 50_000.0,
        }
    }
}

/// Container for all projection assumptions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Superannuation age
    pub retirement_age_years: u32,
    pub pay: PayAssumptions,
    pub nps: NpsAssumptions,
    pub ups: UpsAssumptions,
    pub plausibility: PlausibilityAssumptions,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_pricing()
    }
}

impl Assumptions {
    /// Central government rules as currently notified
    pub fn default_pricing() -> Self {
        Self {
            retirement_age_years: 60,
            pay: PayAssumptions::default(),
            nps: NpsAssumptions::default(),
            ups: UpsAssumptions::default(),
            plausibility: PlausibilityAssumptions::default(),
        }
    }

    /// Load from a JSON file; keys not present keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self, LoadError> {
        let assumptions: Self = read_json(path)?;
        log::debug!("Loaded assumptions from {}", path.display());
        Ok(assumptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pricing() {
        let a = Assumptions::default_pricing();
        assert_eq!(a.retirement_age_years, 60);
        assert_eq!(a.pay.da_hike_points, 3.5);
        assert_eq!(a.nps.annuity_rate, 0.065);
        assert_eq!(a.ups.minimum_pension, 10_000.0);
    }

    #[test]
    fn test_nested_partial_override() {
        let json = r#"{
            "retirement_age_years": 62,
            "pay": { "revision_years": [2026, 2036] },
            "nps": { "assumed_annual_return": 0.08 }
        }"#;
        let a: Assumptions = serde_json::from_str(json).unwrap();

        assert_eq!(a.retirement_age_years, 62);
        assert_eq!(a.pay.revision_years.years(), &[2026, 2036]);
        assert_eq!(a.pay.annual_increment_rate, 0.03);
        assert_eq!(a.nps.assumed_annual_return, 0.08);
        assert_eq!(a.nps.employer_contribution_rate, 0.14);
        assert_eq!(a.ups.gratuity_ceiling, 2_000_000.0);
    }

    #[test]
    fn test_conservative_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/assumptions_conservative.json");
        let a = Assumptions::from_json_path(&path).unwrap();

        assert_eq!(a.pay.revision_increase_rate, 0.15);
        assert!(a.pay.revision_years.contains(2066));
        assert!(!a.pay.revision_years.contains(2016));
        assert_eq!(a.nps.annuity_rate, 0.06);
        assert_eq!(a.ups.minimum_pension, 10_000.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Assumptions::from_json_path(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
