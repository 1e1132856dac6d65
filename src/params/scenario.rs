//! Named onboarding/churn scenarios and the ordered scenario catalog

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Assumptions for one independent projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Active nodes at month 0
    pub start_nodes: u64,

    /// Fractional monthly onboarding rate applied to the active node count
    /// (0.01 = +1% nodes per month)
    pub growth_rate: f64,

    /// Fractional monthly churn rate applied to the active node count,
    /// expected in [0, 1]
    pub offline_rate: f64,
}

impl ScenarioConfig {
    pub fn new(start_nodes: u64, growth_rate: f64, offline_rate: f64) -> Self {
        Self { start_nodes, growth_rate, offline_rate }
    }

    /// Validate the scenario; `name` is only used for the error message
    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.start_nodes == 0 {
            return Err(ConfigError::scenario(name, "start_nodes must be positive"));
        }
        if !self.growth_rate.is_finite() || self.growth_rate < 0.0 {
            return Err(ConfigError::scenario(
                name,
                format!("growth_rate {} must be a finite value >= 0", self.growth_rate),
            ));
        }
        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&self.offline_rate) {
            return Err(ConfigError::scenario(
                name,
                format!("offline_rate {} must be within [0, 1]", self.offline_rate),
            ));
        }
        Ok(())
    }
}

/// Insertion-ordered mapping of scenario name to configuration
///
/// Iteration order is the reporting order downstream, so it is kept
/// explicitly rather than relying on a map's iteration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCatalog {
    entries: Vec<(String, ScenarioConfig)>,
}

impl ScenarioCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three reference scenarios
    pub fn reference() -> Self {
        let mut catalog = Self::new();
        // +1% nodes, 5% offline each month
        catalog.push("A_pessimistic", ScenarioConfig::new(100, 0.01, 0.05));
        // +5% nodes, 5% offline
        catalog.push("B_realistic", ScenarioConfig::new(5000, 0.05, 0.05));
        // +10% nodes, 0.5% offline
        catalog.push("C_aggressive", ScenarioConfig::new(500, 0.10, 0.005));
        catalog
    }

    /// Add a scenario. Re-using a name replaces its config but keeps its
    /// original position.
    pub fn push(&mut self, name: impl Into<String>, config: ScenarioConfig) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = config,
            None => self.entries.push((name, config)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ScenarioConfig> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScenarioConfig)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(String, ScenarioConfig)] {
        &self.entries
    }
}

impl<S: Into<String>> FromIterator<(S, ScenarioConfig)> for ScenarioCatalog {
    fn from_iter<I: IntoIterator<Item = (S, ScenarioConfig)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (name, config) in iter {
            catalog.push(name, config);
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_order() {
        let catalog = ScenarioCatalog::reference();
        assert_eq!(catalog.names(), vec!["A_pessimistic", "B_realistic", "C_aggressive"]);

        let b = catalog.get("B_realistic").unwrap();
        assert_eq!(b.start_nodes, 5000);
        assert_eq!(b.growth_rate, 0.05);
        assert_eq!(b.offline_rate, 0.05);
        assert!(catalog.iter().all(|(name, cfg)| cfg.validate(name).is_ok()));
    }

    #[test]
    fn test_push_replaces_in_place() {
        let mut catalog = ScenarioCatalog::reference();
        catalog.push("A_pessimistic", ScenarioConfig::new(1, 0.0, 0.0));

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.names()[0], "A_pessimistic");
        assert_eq!(catalog.get("A_pessimistic").unwrap().start_nodes, 1);
    }

    #[test]
    fn test_from_iterator_keeps_insertion_order() {
        let catalog: ScenarioCatalog = vec![
            ("zeta", ScenarioConfig::new(10, 0.1, 0.1)),
            ("alpha", ScenarioConfig::new(20, 0.1, 0.1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(catalog.names(), vec!["zeta", "alpha"]);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_scenario_validation() {
        assert!(ScenarioConfig::new(1, 0.0, 0.0).validate("ok").is_ok());
        assert!(ScenarioConfig::new(1, 3.0, 1.0).validate("ok").is_ok());

        let bad = [
            ScenarioConfig::new(0, 0.01, 0.05),
            ScenarioConfig::new(10, -0.01, 0.05),
            ScenarioConfig::new(10, f64::NAN, 0.05),
            ScenarioConfig::new(10, f64::INFINITY, 0.05),
            ScenarioConfig::new(10, 0.01, -0.1),
            ScenarioConfig::new(10, 0.01, 1.5),
            ScenarioConfig::new(10, 0.01, f64::NAN),
        ];
        for cfg in bad {
            match cfg.validate("bad") {
                Err(ConfigError::InvalidScenario { name, .. }) => assert_eq!(name, "bad"),
                other => panic!("expected InvalidScenario for {:?}, got {:?}", cfg, other),
            }
        }
    }
}
