//! Balance accounting
//!
//! The `Ledger` holds the running daily and total balances. Changes go
//! through a `BalanceManager`, which validates the amount and applies it
//! in its own direction. Whether a day counts as passed is decided by a
//! pluggable `DayRule`.

use log::warn;

use super::error::BalanceError;

/// Default balance needed on the first day
pub const DEFAULT_DAILY_TARGET: f64 = 20.0;
/// Default raise of the target for every day already passed
pub const DEFAULT_TARGET_INCREASE: f64 = 5.0;

/// Running balances for the current day and for the whole session
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ledger {
    balance_day: f64,
    balance_total: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_day(&self) -> f64 {
        self.balance_day
    }

    pub fn balance_total(&self) -> f64 {
        self.balance_total
    }

    /// Zero the daily balance
    pub fn reset_balance_day(&mut self) {
        self.balance_day = 0.0;
    }

    /// Fold the daily balance into the total. The daily balance is kept
    /// until `reset_balance_day`.
    pub fn add_balance_total(&mut self) {
        self.balance_total += self.balance_day;
    }
}

/// Direction in which a manager moves the daily balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceManager {
    /// Sales and other income
    Adder,
    /// Purchases and other costs
    Subtractor,
}

impl BalanceManager {
    /// Check that `amount` is a usable magnitude and return the signed delta
    fn signed_delta(self, amount: f64) -> Result<f64, BalanceError> {
        if amount.is_nan() {
            return Err(BalanceError::InvalidArgument {
                amount,
                reason: "amount is not a number",
            });
        }
        if amount.is_infinite() {
            return Err(BalanceError::InvalidArgument {
                amount,
                reason: "amount is not finite",
            });
        }
        if amount < 0.0 {
            return Err(BalanceError::InvalidArgument {
                amount,
                reason: "amount must not be negative",
            });
        }

        Ok(match self {
            BalanceManager::Adder => amount,
            BalanceManager::Subtractor => -amount,
        })
    }

    /// Apply `amount` to the daily balance.
    /// On error the ledger is left untouched.
    pub fn update_balance(self, ledger: &mut Ledger, amount: f64) -> Result<(), BalanceError> {
        match self.signed_delta(amount) {
            Ok(delta) => {
                ledger.balance_day += delta;
                Ok(())
            }
            Err(err) => {
                warn!("{:?} rejected balance update: {}", self, err);
                Err(err)
            }
        }
    }
}

/// Decides whether a finished day counts as passed
pub trait DayRule: Send {
    fn day_passed(&self, balance_day: f64, working_days: u32) -> bool;
}

impl<F> DayRule for F
where
    F: Fn(f64, u32) -> bool + Send,
{
    fn day_passed(&self, balance_day: f64, working_days: u32) -> bool {
        self(balance_day, working_days)
    }
}

/// Pass when the day's balance reaches a target that grows with every
/// passed day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTarget {
    pub base: f64,
    pub increase_per_day: f64,
}

impl DailyTarget {
    pub fn new(base: f64, increase_per_day: f64) -> Self {
        Self {
            base,
            increase_per_day,
        }
    }

    /// Balance required on the given day (days are numbered from 1)
    pub fn target_for(&self, working_days: u32) -> f64 {
        self.base + self.increase_per_day * f64::from(working_days.saturating_sub(1))
    }
}

impl Default for DailyTarget {
    fn default() -> Self {
        Self::new(DEFAULT_DAILY_TARGET, DEFAULT_TARGET_INCREASE)
    }
}

impl DayRule for DailyTarget {
    fn day_passed(&self, balance_day: f64, working_days: u32) -> bool {
        balance_day >= self.target_for(working_days)
    }
}
