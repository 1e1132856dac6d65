//! Process-wide economic constants shared by every scenario in a run

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Token economy constants
///
/// Immutable for the duration of a run and shared read-only across scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConstants {
    /// Token supply at month 0
    pub initial_supply: u64,

    /// Hard ceiling on total supply; minting is clamped to stay at or below it
    pub supply_cap: u64,

    /// Tokens minted into the reward pool per newly onboarded node
    pub mint_per_node: u64,

    /// Tokens burned per node that goes offline in a month
    pub burn_per_offline_node: u64,
}

impl Default for GlobalConstants {
    fn default() -> Self {
        Self {
            initial_supply: 1_000_000_000,  // 1B EDGE
            supply_cap: 1_500_000_000,      // 1.5B EDGE
            mint_per_node: 200,
            burn_per_offline_node: 200,     // node inactive > 30 days
        }
    }
}

impl GlobalConstants {
    /// Check the cross-field invariant `supply_cap >= initial_supply`.
    /// Non-negativity is carried by the unsigned field types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supply_cap < self.initial_supply {
            return Err(ConfigError::InvalidConstants(format!(
                "supply_cap ({}) is below initial_supply ({})",
                self.supply_cap, self.initial_supply
            )));
        }
        Ok(())
    }

    /// Headroom between the current supply and the cap
    pub fn headroom(&self, supply: u64) -> u64 {
        self.supply_cap.saturating_sub(supply)
    }
}
