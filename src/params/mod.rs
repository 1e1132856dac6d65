//! Economic constants, scenario definitions and run-file loading

mod constants;
mod scenario;
pub mod loader;

pub use constants::GlobalConstants;
pub use scenario::{ScenarioConfig, ScenarioCatalog};
pub use loader::{RunFile, RunParams, load_run_file, load_run_file_from_reader, load_catalog_csv, load_catalog_from_reader};

use crate::error::ConfigError;

/// Default projection horizon: five years of monthly steps
pub const DEFAULT_HORIZON_MONTHS: u32 = 60;

/// Check a requested horizon and narrow it to a month count
pub fn validate_horizon(horizon_months: i64) -> Result<u32, ConfigError> {
    if horizon_months <= 0 {
        return Err(ConfigError::InvalidHorizon(horizon_months));
    }
    u32::try_from(horizon_months).map_err(|_| ConfigError::InvalidHorizon(horizon_months))
}
