//! Projection engine for monthly pay and NPS corpus evolution

mod state;
mod engine;
mod schedule;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig};
pub use schedule::{MonthRow, ProjectionResult};
