//! Core projection engine

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::params::{GlobalConstants, ScenarioConfig, DEFAULT_HORIZON_MONTHS};
use super::{MonthlySnapshot, ProjectionResult, ProjectionState};

/// Projection configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionConfig {
    /// Number of monthly steps (and snapshots) per scenario
    pub horizon_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }
}

/// Main projection engine
///
/// Holds only read-only inputs, so one engine can project any number of
/// scenarios, from any number of threads.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    constants: GlobalConstants,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(constants: GlobalConstants, config: ProjectionConfig) -> Self {
        Self { constants, config }
    }

    pub fn constants(&self) -> &GlobalConstants {
        &self.constants
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project a single scenario over the full horizon.
    /// Inputs are expected to be validated by the caller.
    pub fn project(&self, scenario: &ScenarioConfig) -> ProjectionResult {
        debug!(
            "Projecting {} months: start_nodes={}, growth={}, offline={}",
            self.config.horizon_months, scenario.start_nodes, scenario.growth_rate, scenario.offline_rate
        );
        let result: ProjectionResult = self.iter(scenario).collect();

        if let Some(last) = result.final_snapshot() {
            debug!(
                "Projection complete: active_nodes={}, supply={}, burned={}, reward_pool={}",
                last.active_nodes, last.supply, last.burned_total, last.reward_pool
            );
        }
        result
    }

    /// Lazily yield the monthly snapshots of a scenario
    pub fn iter(&self, scenario: &ScenarioConfig) -> Trajectory {
        Trajectory {
            constants: self.constants,
            scenario: *scenario,
            state: ProjectionState::new(&self.constants, scenario),
            remaining: self.config.horizon_months,
        }
    }
}

/// Lazy trajectory: each call to `next` runs one monthly transition
#[derive(Debug, Clone)]
pub struct Trajectory {
    constants: GlobalConstants,
    scenario: ScenarioConfig,
    state: ProjectionState,
    remaining: u32,
}

impl Iterator for Trajectory {
    type Item = MonthlySnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let snapshot = self.state.step(&self.constants, &self.scenario);
        trace!("{:?}", snapshot);
        Some(snapshot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Trajectory {}

impl FusedIterator for Trajectory {}
