//! Final-month summary rows

use serde::{Deserialize, Serialize};

use crate::projection::ProjectionResult;

/// One row of the end-of-horizon summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub scenario: String,
    pub active_nodes: u64,
    pub nodes_cumulative: u64,
    pub supply: u64,
    pub burned_total: u64,
    pub reward_pool: u64,
}

impl SummaryRow {
    /// Build from the last snapshot; `None` for an empty trajectory
    pub fn from_result(scenario: &str, result: &ProjectionResult) -> Option<Self> {
        result.final_snapshot().map(|last| Self {
            scenario: scenario.to_string(),
            active_nodes: last.active_nodes,
            nodes_cumulative: last.nodes_cumulative,
            supply: last.supply,
            burned_total: last.burned_total,
            reward_pool: last.reward_pool,
        })
    }
}
