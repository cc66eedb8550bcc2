//! Tunables for a game session

use std::time::Duration;

use super::balance::{DailyTarget, DEFAULT_DAILY_TARGET, DEFAULT_TARGET_INCREASE};
use super::clock::DEFAULT_TICK_PERIOD;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Real time between clock ticks when driven by a `DayTimer`
    pub tick_period: Duration,
    /// Balance needed to pass the first day
    pub daily_target: f64,
    /// Added to the target for every day already passed
    pub target_increase: f64,
    /// Seed for reproducible customer orders
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            daily_target: DEFAULT_DAILY_TARGET,
            target_increase: DEFAULT_TARGET_INCREASE,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn day_rule(&self) -> DailyTarget {
        DailyTarget::new(self.daily_target, self.target_increase)
    }
}
