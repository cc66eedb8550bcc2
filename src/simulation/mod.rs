//! Standalone pizzeria simulation module
//!
//! This module contains all the core game logic: ingredient stock, the
//! day clock, and balance accounting. It runs without any rendering layer
//! and can be driven from the console.

mod balance;
mod clock;
mod config;
mod error;
mod game_state;
mod ingredient;
mod kitchen;
mod menu;
mod pizza;
mod timer;
mod types;
mod world;

// Re-export public types for external use
pub use balance::{
    BalanceManager, DailyTarget, DayRule, Ledger, DEFAULT_DAILY_TARGET, DEFAULT_TARGET_INCREASE,
};
pub use clock::{
    ticks_per_day, ClockPhase, ClockTick, DayClock, CLOSING_TIME, DEFAULT_TICK_PERIOD,
    MINUTES_PER_TICK, OPENING_TIME,
};
pub use config::GameConfig;
pub use error::{BalanceError, KitchenError};
pub use game_state::{DayReport, GameState, FIRST_WORKING_DAY};
pub use ingredient::Ingredient;
pub use kitchen::PreparationZone;
pub use menu::{Menu, Order, Recipe};
pub use pizza::Pizza;
pub use timer::DayTimer;
pub use types::{ClockTime, IngredientKind, MAX_QUANTITY};
pub use world::{PizzeriaHandle, SimPizzeria, TickOutcome};
