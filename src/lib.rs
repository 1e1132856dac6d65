//! Supply Projection - monthly token supply and node population projections
//!
//! This library provides:
//! - Global economic constants and named onboarding/churn scenarios
//! - A cap-respecting mint / churn-driven burn projection engine
//! - A multi-scenario runner (sequential or parallel) with ordered results
//! - Plain-data reporting: summary tables, trajectory CSVs, chart series

pub mod error;
pub mod params;
pub mod projection;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::{ConfigError, LoadError};
pub use params::{GlobalConstants, ScenarioConfig, ScenarioCatalog, DEFAULT_HORIZON_MONTHS};
pub use projection::{MonthlySnapshot, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use scenario::{CatalogResults, ScenarioOutcome, ScenarioRunner, SummaryRow};
