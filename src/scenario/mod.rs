//! Multi-scenario runner and summary extraction

mod runner;
mod summary;

pub use runner::{CatalogResults, ScenarioOutcome, ScenarioRunner};
pub use summary::SummaryRow;
