//! Running state threaded through the monthly transition

use crate::params::{GlobalConstants, ScenarioConfig};
use super::MonthlySnapshot;

/// Per-run state. Each run owns a fresh instance; nothing is shared
/// between scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionState {
    /// Index of the next month to be emitted
    pub month: u32,
    pub active_nodes: u64,
    pub supply: u64,
    pub burned_total: u64,
    pub reward_pool: u64,
    pub nodes_cumulative: u64,
}

impl ProjectionState {
    /// Initial state before month 0; not emitted as a snapshot
    pub fn new(constants: &GlobalConstants, scenario: &ScenarioConfig) -> Self {
        Self {
            month: 0,
            active_nodes: scenario.start_nodes,
            supply: constants.initial_supply,
            burned_total: 0,
            reward_pool: 0,
            nodes_cumulative: scenario.start_nodes,
        }
    }

    /// Advance one month and return the resulting snapshot.
    ///
    /// Onboarding and churn are both sized from the active count at the
    /// start of the month. Minting is cap-checked against the pre-burn
    /// supply.
    pub fn step(&mut self, constants: &GlobalConstants, scenario: &ScenarioConfig) -> MonthlySnapshot {
        let base_nodes = self.active_nodes;

        // Onboarding and mint
        let new_nodes = nodes_at_rate(base_nodes, scenario.growth_rate);
        self.nodes_cumulative = self.nodes_cumulative.saturating_add(new_nodes);

        let mint_amount = new_nodes
            .saturating_mul(constants.mint_per_node)
            .min(constants.headroom(self.supply));
        self.supply += mint_amount;
        self.reward_pool = self.reward_pool.saturating_add(mint_amount);

        // Offline churn and burn
        let offline_nodes = nodes_at_rate(base_nodes, scenario.offline_rate);
        let burn_amount = offline_nodes.saturating_mul(constants.burn_per_offline_node);
        self.burned_total = self.burned_total.saturating_add(burn_amount);
        self.supply = self.supply.saturating_sub(burn_amount);

        // Floors at zero; only reachable with offline_rate > 1
        self.active_nodes = base_nodes
            .saturating_add(new_nodes)
            .saturating_sub(offline_nodes);

        let snapshot = self.snapshot();
        self.month += 1;
        snapshot
    }

    fn snapshot(&self) -> MonthlySnapshot {
        MonthlySnapshot {
            month: self.month,
            active_nodes: self.active_nodes,
            supply: self.supply,
            burned_total: self.burned_total,
            reward_pool: self.reward_pool,
            nodes_cumulative: self.nodes_cumulative,
        }
    }
}

/// Whole nodes produced by applying `rate` to `nodes` (truncating)
pub(crate) fn nodes_at_rate(nodes: u64, rate: f64) -> u64 {
    // `as` saturates and maps NaN/negatives to 0
    (nodes as f64 * rate).floor() as u64
}
