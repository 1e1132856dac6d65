//! Load run parameters from JSON run files and scenario catalogs from CSV
//!
//! File-level records use signed integers so that negative inputs surface as
//! configuration errors rather than parse failures.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{GlobalConstants, ScenarioCatalog, ScenarioConfig, DEFAULT_HORIZON_MONTHS};
use crate::error::{ConfigError, LoadError};

/// Constants as written in a run file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantsRecord {
    #[serde(default = "default_initial_supply")]
    pub initial_supply: i64,
    #[serde(default = "default_supply_cap")]
    pub supply_cap: i64,
    #[serde(default = "default_mint_per_node")]
    pub mint_per_node: i64,
    #[serde(default = "default_burn_per_offline_node")]
    pub burn_per_offline_node: i64,
}

fn default_initial_supply() -> i64 { GlobalConstants::default().initial_supply as i64 }
fn default_supply_cap() -> i64 { GlobalConstants::default().supply_cap as i64 }
fn default_mint_per_node() -> i64 { GlobalConstants::default().mint_per_node as i64 }
fn default_burn_per_offline_node() -> i64 { GlobalConstants::default().burn_per_offline_node as i64 }
fn default_horizon() -> i64 { DEFAULT_HORIZON_MONTHS as i64 }

impl Default for ConstantsRecord {
    fn default() -> Self {
        Self {
            initial_supply: default_initial_supply(),
            supply_cap: default_supply_cap(),
            mint_per_node: default_mint_per_node(),
            burn_per_offline_node: default_burn_per_offline_node(),
        }
    }
}

impl TryFrom<ConstantsRecord> for GlobalConstants {
    type Error = ConfigError;

    fn try_from(record: ConstantsRecord) -> Result<Self, Self::Error> {
        let non_negative = |field: &str, value: i64| {
            u64::try_from(value).map_err(|_| {
                ConfigError::InvalidConstants(format!("{} must be non-negative, got {}", field, value))
            })
        };

        let constants = GlobalConstants {
            initial_supply: non_negative("initial_supply", record.initial_supply)?,
            supply_cap: non_negative("supply_cap", record.supply_cap)?,
            mint_per_node: non_negative("mint_per_node", record.mint_per_node)?,
            burn_per_offline_node: non_negative("burn_per_offline_node", record.burn_per_offline_node)?,
        };
        constants.validate()?;
        Ok(constants)
    }
}

/// One scenario row, shared by the JSON `scenarios` array and the CSV catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub name: String,
    pub start_nodes: i64,
    pub growth_rate: f64,
    pub offline_rate: f64,
}

impl ScenarioRecord {
    /// Non-positive node counts map to 0, which scenario validation rejects
    /// later without failing the rest of the catalog.
    fn into_entry(self) -> (String, ScenarioConfig) {
        let start_nodes = u64::try_from(self.start_nodes).unwrap_or(0);
        (self.name, ScenarioConfig::new(start_nodes, self.growth_rate, self.offline_rate))
    }
}

impl From<(&str, &ScenarioConfig)> for ScenarioRecord {
    fn from((name, config): (&str, &ScenarioConfig)) -> Self {
        Self {
            name: name.to_string(),
            start_nodes: config.start_nodes as i64,
            growth_rate: config.growth_rate,
            offline_rate: config.offline_rate,
        }
    }
}

fn default_scenarios() -> Vec<ScenarioRecord> {
    ScenarioCatalog::reference().iter().map(ScenarioRecord::from).collect()
}

/// JSON run file. Every section is optional and falls back to the reference run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFile {
    #[serde(default)]
    pub constants: ConstantsRecord,

    #[serde(default = "default_horizon")]
    pub horizon_months: i64,

    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<ScenarioRecord>,
}

impl Default for RunFile {
    fn default() -> Self {
        Self {
            constants: ConstantsRecord::default(),
            horizon_months: default_horizon(),
            scenarios: default_scenarios(),
        }
    }
}

/// Resolved run parameters
#[derive(Debug, Clone)]
pub struct RunParams {
    pub constants: GlobalConstants,
    /// Unvalidated; the scenario runner checks it
    pub horizon_months: i64,
    pub catalog: ScenarioCatalog,
}

impl RunFile {
    /// Convert file records into typed parameters, checking the constants
    pub fn resolve(self) -> Result<RunParams, ConfigError> {
        let constants = GlobalConstants::try_from(self.constants)?;
        let catalog = self.scenarios.into_iter().map(ScenarioRecord::into_entry).collect();
        Ok(RunParams {
            constants,
            horizon_months: self.horizon_months,
            catalog,
        })
    }
}

/// Load and resolve a JSON run file
pub fn load_run_file<P: AsRef<Path>>(path: P) -> Result<RunParams, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let params = load_run_file_from_reader(file)?;
    info!(
        "Loaded run file {} ({} scenarios, {} months)",
        path.display(),
        params.catalog.len(),
        params.horizon_months
    );
    Ok(params)
}

/// Load and resolve a JSON run file from any reader
pub fn load_run_file_from_reader<R: Read>(reader: R) -> Result<RunParams, LoadError> {
    let run_file: RunFile = serde_json::from_reader(reader)?;
    Ok(run_file.resolve()?)
}

/// Load a scenario catalog from a CSV file
/// (`name,start_nodes,growth_rate,offline_rate`)
pub fn load_catalog_csv<P: AsRef<Path>>(path: P) -> Result<ScenarioCatalog, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let catalog = load_catalog_from_reader(file)?;
    info!("Loaded {} scenarios from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load a scenario catalog from any CSV reader, keeping row order
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<ScenarioCatalog, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut catalog = ScenarioCatalog::new();
    for result in rdr.deserialize() {
        let record: ScenarioRecord = result?;
        debug!("Scenario row: {:?}", record);
        let (name, config) = record.into_entry();
        catalog.push(name, config);
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_run_file_uses_reference_run() {
        let params = load_run_file_from_reader("{}".as_bytes()).unwrap();
        assert_eq!(params.constants, GlobalConstants::default());
        assert_eq!(params.horizon_months, 60);
        assert_eq!(params.catalog, ScenarioCatalog::reference());
    }

    #[test]
    fn test_run_file_overrides() {
        let json = r#"{
            "constants": { "supply_cap": 2000000000, "burn_per_offline_node": 50 },
            "horizon_months": 24,
            "scenarios": [
                { "name": "steady", "start_nodes": 1000, "growth_rate": 0.02, "offline_rate": 0.02 },
                { "name": "boom", "start_nodes": 10, "growth_rate": 0.5, "offline_rate": 0.0 }
            ]
        }"#;
        let params = load_run_file_from_reader(json.as_bytes()).unwrap();

        assert_eq!(params.constants.supply_cap, 2_000_000_000);
        assert_eq!(params.constants.burn_per_offline_node, 50);
        // Untouched fields keep their defaults
        assert_eq!(params.constants.initial_supply, 1_000_000_000);
        assert_eq!(params.constants.mint_per_node, 200);
        assert_eq!(params.horizon_months, 24);
        assert_eq!(params.catalog.names(), vec!["steady", "boom"]);
    }

    #[test]
    fn test_negative_constant_is_invalid_constants() {
        let json = r#"{ "constants": { "mint_per_node": -5 } }"#;
        match load_run_file_from_reader(json.as_bytes()) {
            Err(LoadError::Config(ConfigError::InvalidConstants(msg))) => {
                assert!(msg.contains("mint_per_node"));
            }
            other => panic!("expected InvalidConstants, got {:?}", other),
        }
    }

    #[test]
    fn test_cap_below_supply_is_invalid_constants() {
        let json = r#"{ "constants": { "initial_supply": 10, "supply_cap": 5 } }"#;
        assert!(matches!(
            load_run_file_from_reader(json.as_bytes()),
            Err(LoadError::Config(ConfigError::InvalidConstants(_)))
        ));
    }

    #[test]
    fn test_non_positive_start_nodes_survive_loading() {
        let json = r#"{ "scenarios": [
            { "name": "dead", "start_nodes": -3, "growth_rate": 0.1, "offline_rate": 0.1 }
        ] }"#;
        let params = load_run_file_from_reader(json.as_bytes()).unwrap();
        let dead = params.catalog.get("dead").unwrap();
        assert_eq!(dead.start_nodes, 0);
        assert!(dead.validate("dead").is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            load_run_file_from_reader("{ not json".as_bytes()),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_catalog_csv() {
        let csv_data = "\
name,start_nodes,growth_rate,offline_rate
C_aggressive, 500, 0.10, 0.005
A_pessimistic, 100, 0.01, 0.05
";
        let catalog = load_catalog_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(catalog.names(), vec!["C_aggressive", "A_pessimistic"]);
        assert_eq!(catalog.get("C_aggressive"), Some(&ScenarioConfig::new(500, 0.10, 0.005)));
    }

    #[test]
    fn test_catalog_csv_bad_row() {
        let csv_data = "name,start_nodes,growth_rate,offline_rate\nx,ten,0.1,0.1\n";
        assert!(matches!(
            load_catalog_from_reader(csv_data.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_run_file("/definitely/not/here.json"),
            Err(LoadError::Io { .. })
        ));
    }
}
