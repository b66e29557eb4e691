//! Raw input checks and advisory grade-pay plausibility warnings

use super::data::{Employee, GradePay};
use crate::assumptions::PlausibilityAssumptions;
use crate::error::{read_json, InputError, LoadError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Unvalidated input as collected from a form, CLI flags or a JSON file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEmployeeInput {
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_joining: Option<NaiveDate>,
    pub effective_pay_date: Option<NaiveDate>,
    pub current_basic_pay: Option<f64>,
    pub current_da_rate_percent: Option<f64>,
    pub grade_pay: Option<String>,
}

impl RawEmployeeInput {
    pub fn from_json_path(path: &Path) -> Result<Self, LoadError> {
        read_json(path)
    }

    /// Check presence, date ordering and ranges against `today`
    pub fn validate(&self, today: NaiveDate) -> Result<Employee, InputError> {
        let dob = required(self.date_of_birth, "date_of_birth")?;
        let doj = required(self.date_of_joining, "date_of_joining")?;
        let effective = required(self.effective_pay_date, "effective_pay_date")?;
        let basic = required_number(self.current_basic_pay, "current_basic_pay")?;
        let da_rate = required_number(self.current_da_rate_percent, "current_da_rate_percent")?;
        let grade_code = self
            .grade_pay
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(InputError::Incomplete { field: "grade_pay" })?;

        if dob >= today || doj >= today || doj <= dob || effective > today || effective < doj {
            return Err(InputError::InvalidRange(
                "dates must satisfy date of birth < date of joining <= effective date <= today".into(),
            ));
        }
        if basic <= 0.0 {
            return Err(InputError::InvalidRange("basic pay must be positive".into()));
        }
        if da_rate < 0.0 {
            return Err(InputError::InvalidRange("DA rate cannot be negative".into()));
        }

        let grade_pay: GradePay = grade_code.parse().map_err(InputError::InvalidRange)?;

        Ok(Employee::new(dob, doj, effective, basic, da_rate, grade_pay))
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, InputError> {
    value.ok_or(InputError::Incomplete { field })
}

fn required_number(value: Option<f64>, field: &'static str) -> Result<f64, InputError> {
    value
        .filter(|v| v.is_finite())
        .ok_or(InputError::Incomplete { field })
}

/// Non-fatal mismatch between the supplied pay and the grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlausibilityWarning {
    /// Pay drawn in the joining year is below the entry pay of the level
    BelowEntryPay {
        basic_pay: f64,
        grade_pay: GradePay,
        entry_pay: f64,
    },
    /// Pay is far below anything drawn at a senior level
    VeryLowForGrade {
        basic_pay: f64,
        grade_pay: GradePay,
        entry_pay: f64,
    },
}

impl fmt::Display for PlausibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlausibilityWarning::BelowEntryPay { basic_pay, grade_pay, entry_pay } => write!(
                f,
                "basic pay {:.0} seems low for grade pay {} (entry pay {:.0}) near the date of joining; please verify inputs",
                basic_pay, grade_pay, entry_pay
            ),
            PlausibilityWarning::VeryLowForGrade { basic_pay, grade_pay, entry_pay } => write!(
                f,
                "basic pay {:.0} seems very low for grade pay {} (entry pay {:.0}); please verify inputs",
                basic_pay, grade_pay, entry_pay
            ),
        }
    }
}

/// Advisory checks of the basic pay against the grade's entry pay
pub fn plausibility_warnings(
    employee: &Employee,
    thresholds: &PlausibilityAssumptions,
) -> Vec<PlausibilityWarning> {
    let mut warnings = Vec::new();
    let basic_pay = employee.current_basic_pay;
    let grade_pay = employee.grade_pay;
    let entry_pay = grade_pay.entry_pay();

    if employee.pay_is_from_joining_year() && basic_pay < entry_pay * thresholds.entry_pay_tolerance {
        warnings.push(PlausibilityWarning::BelowEntryPay { basic_pay, grade_pay, entry_pay });
    }

    if basic_pay < thresholds.very_low_basic && entry_pay > thresholds.senior_entry_pay {
        warnings.push(PlausibilityWarning::VeryLowForGrade { basic_pay, grade_pay, entry_pay });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 3, 1)
    }

    fn complete_input() -> RawEmployeeInput {
        RawEmployeeInput {
            date_of_birth: Some(date(1990, 1, 15)),
            date_of_joining: Some(date(2015, 6, 1)),
            effective_pay_date: Some(date(2015, 6, 1)),
            current_basic_pay: Some(56_100.0),
            current_da_rate_percent: Some(0.0),
            grade_pay: Some("6000".to_string()),
        }
    }

    #[test]
    fn test_valid_input() {
        let employee = complete_input().validate(today()).unwrap();
        assert_eq!(employee.grade_pay, GradePay::Gp6000);
        assert_eq!(employee.current_basic_pay, 56_100.0);
    }

    #[test]
    fn test_missing_field_is_incomplete() {
        let mut input = complete_input();
        input.effective_pay_date = None;
        assert_eq!(
            input.validate(today()),
            Err(InputError::Incomplete { field: "effective_pay_date" })
        );

        let mut input = complete_input();
        input.grade_pay = Some("  ".to_string());
        assert_eq!(input.validate(today()), Err(InputError::Incomplete { field: "grade_pay" }));
    }

    #[test]
    fn test_non_numeric_is_incomplete() {
        let mut input = complete_input();
        input.current_basic_pay = Some(f64::NAN);
        assert_eq!(
            input.validate(today()),
            Err(InputError::Incomplete { field: "current_basic_pay" })
        );
    }

    #[test]
    fn test_date_ordering() {
        let mut input = complete_input();
        input.date_of_joining = Some(date(1989, 1, 1));
        assert!(matches!(input.validate(today()), Err(InputError::InvalidRange(_))));

        let mut input = complete_input();
        input.effective_pay_date = Some(date(2015, 5, 31));
        assert!(matches!(input.validate(today()), Err(InputError::InvalidRange(_))));

        let mut input = complete_input();
        input.effective_pay_date = Some(date(2025, 3, 2));
        assert!(matches!(input.validate(today()), Err(InputError::InvalidRange(_))));

        // Effective date may be today
        let mut input = complete_input();
        input.effective_pay_date = Some(today());
        assert!(input.validate(today()).is_ok());
    }

    #[test]
    fn test_pay_and_da_ranges() {
        let mut input = complete_input();
        input.current_basic_pay = Some(0.0);
        assert!(matches!(input.validate(today()), Err(InputError::InvalidRange(_))));

        let mut input = complete_input();
        input.current_da_rate_percent = Some(-1.0);
        assert!(matches!(input.validate(today()), Err(InputError::InvalidRange(_))));
    }

    #[test]
    fn test_unknown_grade_pay() {
        let mut input = complete_input();
        input.grade_pay = Some("4800".to_string());
        assert!(matches!(input.validate(today()), Err(InputError::InvalidRange(_))));
    }

    #[test]
    fn test_raw_input_from_json() {
        let json = r#"{
            "date_of_birth": "1990-01-15",
            "date_of_joining": "2015-06-01",
            "effective_pay_date": "2015-06-01",
            "current_basic_pay": 56100,
            "grade_pay": "6000"
        }"#;
        let input: RawEmployeeInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.current_da_rate_percent, None);
        assert_eq!(
            input.validate(today()),
            Err(InputError::Incomplete { field: "current_da_rate_percent" })
        );
    }

    #[test]
    fn test_sample_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_employee.json");
        let employee = RawEmployeeInput::from_json_path(&path)
            .unwrap()
            .validate(today())
            .unwrap();
        assert_eq!(employee, complete_input().validate(today()).unwrap());
    }

    #[test]
    fn test_below_entry_pay_warning() {
        let employee = complete_input().validate(today()).unwrap();
        let warnings = plausibility_warnings(&employee, &PlausibilityAssumptions::default());

        assert_eq!(
            warnings,
            vec![PlausibilityWarning::BelowEntryPay {
                basic_pay: 56_100.0,
                grade_pay: GradePay::Gp6000,
                entry_pay: 57_700.0,
            }]
        );
    }

    #[test]
    fn test_tolerance_suppresses_warning() {
        let employee = complete_input().validate(today()).unwrap();
        let thresholds = PlausibilityAssumptions {
            entry_pay_tolerance: 0.95,
            ..Default::default()
        };
        assert!(plausibility_warnings(&employee, &thresholds).is_empty());
    }

    #[test]
    fn test_no_entry_pay_warning_after_joining_year() {
        let mut input = complete_input();
        input.effective_pay_date = Some(date(2019, 7, 1));
        let employee = input.validate(today()).unwrap();
        assert!(plausibility_warnings(&employee, &PlausibilityAssumptions::default()).is_empty());
    }

    #[test]
    fn test_very_low_for_senior_grade() {
        let mut input = complete_input();
        input.effective_pay_date = Some(date(2020, 1, 1));
        input.current_basic_pay = Some(15_000.0);
        input.grade_pay = Some("8000".to_string());
        let employee = input.validate(today()).unwrap();

        let warnings = plausibility_warnings(&employee, &PlausibilityAssumptions::default());
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], PlausibilityWarning::VeryLowForGrade { .. }));
    }
}
