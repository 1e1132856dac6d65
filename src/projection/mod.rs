//! Projection engine for token supply and active-node trajectories

mod state;
mod engine;
mod snapshot;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig, Trajectory};
pub use snapshot::{MonthlySnapshot, ProjectionResult};

/// Months per projection year, used for the years axis of charts
pub const MONTHS_PER_YEAR: u32 = 12;
