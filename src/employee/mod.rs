//! Employee input record, grade pay table and input validation

mod data;
mod validation;

pub use data::{Employee, GradePay};
pub use validation::{plausibility_warnings, PlausibilityWarning, RawEmployeeInput};
