//! Monthly snapshot rows and projection results

use serde::{Deserialize, Serialize};

use super::MONTHS_PER_YEAR;

/// End-of-month state for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// 0-based month index; month 0 is the state after the first step
    pub month: u32,

    /// Nodes active at the end of the month
    pub active_nodes: u64,

    /// Total token supply, always within [0, supply_cap]
    pub supply: u64,

    /// Cumulative tokens burned by churn
    pub burned_total: u64,

    /// Cumulative tokens minted for onboarding rewards
    pub reward_pool: u64,

    /// Every node ever onboarded, including the starting nodes
    pub nodes_cumulative: u64,
}

impl MonthlySnapshot {
    /// Elapsed years on the chart axis (`month / 12`)
    pub fn years(&self) -> f64 {
        self.month as f64 / MONTHS_PER_YEAR as f64
    }
}

/// Complete trajectory of one scenario run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub snapshots: Vec<MonthlySnapshot>,
}

impl ProjectionResult {
    pub fn new(snapshots: Vec<MonthlySnapshot>) -> Self {
        Self { snapshots }
    }

    /// Last month of the horizon, the basis of the summary row
    pub fn final_snapshot(&self) -> Option<&MonthlySnapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthlySnapshot> {
        self.snapshots.iter()
    }
}

impl FromIterator<MonthlySnapshot> for ProjectionResult {
    fn from_iter<I: IntoIterator<Item = MonthlySnapshot>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn snapshot(month: u32) -> MonthlySnapshot {
        MonthlySnapshot {
            month,
            active_nodes: 0,
            supply: 0,
            burned_total: 0,
            reward_pool: 0,
            nodes_cumulative: 0,
        }
    }

    #[test]
    fn test_years_axis() {
        assert_eq!(snapshot(0).years(), 0.0);
        assert_relative_eq!(snapshot(6).years(), 0.5);
        assert_relative_eq!(snapshot(59).years(), 4.916666666666667);
    }

    #[test]
    fn test_final_snapshot() {
        let empty = ProjectionResult::default();
        assert!(empty.final_snapshot().is_none());
        assert!(empty.is_empty());

        let result: ProjectionResult = (0..3).map(snapshot).collect();
        assert_eq!(result.len(), 3);
        assert_eq!(result.final_snapshot().map(|s| s.month), Some(2));
    }
}
