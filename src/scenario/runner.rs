//! Runs every scenario of a catalog through the projection engine

use std::time::Instant;

use log::{info, warn};
use rayon::prelude::*;

use crate::error::ConfigError;
use crate::params::{validate_horizon, GlobalConstants, ScenarioCatalog, ScenarioConfig};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use super::SummaryRow;

/// Result of one catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<ProjectionResult, ConfigError>,
}

/// Outcomes of a catalog run, in catalog order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogResults {
    outcomes: Vec<ScenarioOutcome>,
}

impl CatalogResults {
    pub fn iter(&self) -> std::slice::Iter<'_, ScenarioOutcome> {
        self.outcomes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Successful trajectories, in catalog order
    pub fn trajectories(&self) -> impl Iterator<Item = (&str, &ProjectionResult)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|r| (o.name.as_str(), r)))
    }

    /// Summary rows for the successful scenarios, in catalog order
    pub fn summaries(&self) -> Vec<SummaryRow> {
        self.trajectories()
            .filter_map(|(name, result)| SummaryRow::from_result(name, result))
            .collect()
    }

    /// Scenarios rejected by validation
    pub fn failures(&self) -> Vec<(&str, &ConfigError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.name.as_str(), e)))
            .collect()
    }
}

impl FromIterator<ScenarioOutcome> for CatalogResults {
    fn from_iter<I: IntoIterator<Item = ScenarioOutcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

/// Runs a scenario catalog against shared constants and horizon
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Validate the shared inputs once; scenarios are validated per run
    pub fn new(constants: GlobalConstants, horizon_months: i64) -> Result<Self, ConfigError> {
        constants.validate()?;
        let horizon_months = validate_horizon(horizon_months)?;
        Ok(Self {
            engine: ProjectionEngine::new(constants, ProjectionConfig { horizon_months }),
        })
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Validate and project one scenario
    pub fn run_scenario(&self, name: &str, config: &ScenarioConfig) -> ScenarioOutcome {
        let result = config.validate(name).map(|()| self.engine.project(config));
        if let Err(e) = &result {
            warn!("Skipping scenario: {}", e);
        }
        ScenarioOutcome {
            name: name.to_string(),
            result,
        }
    }

    /// Run the catalog sequentially
    pub fn run(&self, catalog: &ScenarioCatalog) -> CatalogResults {
        let start = Instant::now();
        let results: CatalogResults = catalog
            .iter()
            .map(|(name, config)| self.run_scenario(name, config))
            .collect();
        info!("Projected {} scenarios in {:?}", results.len(), start.elapsed());
        results
    }

    /// Run the catalog on the rayon pool; output order matches the catalog
    pub fn run_parallel(&self, catalog: &ScenarioCatalog) -> CatalogResults {
        let start = Instant::now();
        let outcomes: Vec<ScenarioOutcome> = catalog
            .entries()
            .par_iter()
            .map(|(name, config)| self.run_scenario(name, config))
            .collect();
        info!("Projected {} scenarios in parallel in {:?}", outcomes.len(), start.elapsed());
        outcomes.into_iter().collect()
    }
}
