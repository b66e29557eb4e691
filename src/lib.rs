//! Pension Projection - salary and retirement benefit projection for NPS vs UPS
//!
//! This library provides:
//! - Calendar arithmetic for qualifying service and superannuation dates
//! - A monthly pay projection (increments, DA hikes, pay revisions) with NPS
//!   corpus accumulation
//! - NPS and UPS benefit calculations and a comparison of their 20-year totals
//! - Input validation and advisory grade-pay checks

pub mod assumptions;
pub mod benefits;
pub mod calendar;
pub mod employee;
pub mod error;
pub mod presenter;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use benefits::{BenefitCalculator, BenefitComparison, NpsBenefit, UpsBenefit, Verdict};
pub use employee::{Employee, GradePay, RawEmployeeInput};
pub use error::{InputError, LoadError};
pub use projection::{MonthRow, ProjectionEngine, ProjectionResult};
pub use scenario::{PensionReport, ScenarioRunner};
