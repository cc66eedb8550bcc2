//! Game state tracking for the pizzeria management game
//!
//! Owns the session's balances, the working-day counter and the rule that
//! decides whether a finished day is passed.

use std::fmt;

use log::info;

use super::balance::{BalanceManager, DailyTarget, DayRule, Ledger};
use super::error::BalanceError;

/// Working day number at the start of a session
pub const FIRST_WORKING_DAY: u32 = 1;

/// Outcome of closing a simulated day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayReport {
    /// Number of the day that just closed
    pub day: u32,
    /// Balance earned during that day
    pub balance_day: f64,
    /// Whether the day met the pass rule
    pub passed: bool,
    /// Session total after the rollover
    pub balance_total: f64,
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Day {} {}: earned ${:.2}, total ${:.2}",
            self.day,
            if self.passed { "passed" } else { "failed" },
            self.balance_day,
            self.balance_total
        )
    }
}

/// Session state shared by the clock, the kitchen and the counter
pub struct GameState {
    ledger: Ledger,
    working_days: u32,
    rule: Box<dyn DayRule>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DailyTarget::default())
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("ledger", &self.ledger)
            .field("working_days", &self.working_days)
            .finish_non_exhaustive()
    }
}

impl GameState {
    /// Create a new game state with the given pass rule
    pub fn new(rule: impl DayRule + 'static) -> Self {
        Self {
            ledger: Ledger::new(),
            working_days: FIRST_WORKING_DAY,
            rule: Box::new(rule),
        }
    }

    /// Apply an amount through the given manager
    pub fn update_balance(
        &mut self,
        manager: BalanceManager,
        amount: f64,
    ) -> Result<(), BalanceError> {
        manager.update_balance(&mut self.ledger, amount)
    }

    pub fn reset_balance_day(&mut self) {
        self.ledger.reset_balance_day();
    }

    pub fn add_balance_total(&mut self) {
        self.ledger.add_balance_total();
    }

    /// Whether the current day's balance meets the pass rule
    pub fn level_passed(&self) -> bool {
        self.rule
            .day_passed(self.ledger.balance_day(), self.working_days)
    }

    pub fn balance_day(&self) -> f64 {
        self.ledger.balance_day()
    }

    pub fn balance_total(&self) -> f64 {
        self.ledger.balance_total()
    }

    pub fn working_days(&self) -> u32 {
        self.working_days
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// End-of-day rollover.
    /// A passed day advances the working-day counter and is folded into the
    /// total. The daily balance is reset either way.
    pub fn close_day(&mut self) -> DayReport {
        let day = self.working_days;
        let balance_day = self.ledger.balance_day();
        let passed = self.level_passed();

        if passed {
            self.working_days += 1;
            self.ledger.add_balance_total();
        }
        self.ledger.reset_balance_day();

        let report = DayReport {
            day,
            balance_day,
            passed,
            balance_total: self.ledger.balance_total(),
        };
        info!("{}", report);
        report
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Day: {} | Today: ${:.2} | Total: ${:.2}",
            self.working_days,
            self.ledger.balance_day(),
            self.ledger.balance_total()
        )
    }
}
