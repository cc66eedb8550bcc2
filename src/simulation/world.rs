//! Main simulation world that ties everything together
//!
//! `SimPizzeria` owns the clock, the game state, the kitchen and the menu.
//! A UI (or the headless driver) calls into it; a `DayTimer` ticks it.

use std::sync::{Arc, Mutex, MutexGuard};

use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::balance::BalanceManager;
use super::clock::{ClockPhase, ClockTick, DayClock};
use super::config::GameConfig;
use super::error::{BalanceError, KitchenError};
use super::game_state::{DayReport, GameState};
use super::kitchen::PreparationZone;
use super::menu::{Menu, Order};
use super::pizza::Pizza;
use super::types::{ClockTime, IngredientKind};

/// What a tick of the pizzeria did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Advanced(ClockTime),
    /// Closing time reached and the day rolled over
    DayClosed(DayReport),
    /// No day running
    Idle,
}

pub struct SimPizzeria {
    clock: DayClock,
    pub game_state: GameState,
    pub kitchen: PreparationZone,
    pub menu: Menu,
    /// Credits sales
    sales: BalanceManager,
    /// Pizzas served that matched their order
    pub pizzas_sold: usize,
    /// Pizzas served that did not match
    pub pizzas_rejected: usize,
    /// Optional seeded RNG for reproducible orders
    rng: Option<StdRng>,
}

impl Default for SimPizzeria {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl SimPizzeria {
    fn new_internal(game_state: GameState, rng: Option<StdRng>) -> Self {
        Self {
            clock: DayClock::new(),
            game_state,
            kitchen: PreparationZone::new(),
            menu: Menu::standard(),
            sales: BalanceManager::Adder,
            pizzas_sold: 0,
            pizzas_rejected: 0,
            rng,
        }
    }

    pub fn new(config: &GameConfig) -> Self {
        Self::new_internal(
            GameState::new(config.day_rule()),
            config.seed.map(StdRng::seed_from_u64),
        )
    }

    /// Create a pizzeria with a seeded RNG for reproducible orders
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new(&GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        })
    }

    /// Create a pizzeria with a custom game state
    pub fn with_game_state(game_state: GameState) -> Self {
        Self::new_internal(game_state, None)
    }

    /// Get a random value in the given range, using seeded RNG if available
    pub fn random_range(&mut self, range: std::ops::Range<f64>) -> f64 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    /// Choose a random element from a slice, using seeded RNG if available
    fn choose_random<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        match &mut self.rng {
            Some(rng) => slice.choose(rng),
            None => slice.choose(&mut rand::rng()),
        }
    }

    /// Open for a new day at opening time
    pub fn start_new_day(&mut self) {
        self.clock.start_new_day();
        info!(
            "Day {} opens at {}",
            self.game_state.working_days(),
            self.clock.time()
        );
    }

    /// Advance the clock one step, rolling the day over at closing time
    pub fn tick(&mut self) -> TickOutcome {
        match self.clock.tick() {
            ClockTick::Advanced(time) => TickOutcome::Advanced(time),
            ClockTick::Closed => {
                info!("Closing at {}", self.clock.time());
                TickOutcome::DayClosed(self.game_state.close_day())
            }
            ClockTick::Stopped => TickOutcome::Idle,
        }
    }

    /// Tick until closing time and return the day's report.
    /// Starts a new day first when none is running.
    pub fn run_day(&mut self) -> DayReport {
        if !self.clock.is_running() {
            self.start_new_day();
        }
        loop {
            if let TickOutcome::DayClosed(report) = self.tick() {
                return report;
            }
        }
    }

    pub fn restock(&mut self, kind: IngredientKind) -> Result<(), KitchenError> {
        self.kitchen.restock(kind, &mut self.game_state)
    }

    pub fn add_to_pizza(
        &mut self,
        pizza: &mut Pizza,
        kind: IngredientKind,
    ) -> Result<(), KitchenError> {
        pizza.add_ingredient(&mut self.kitchen, kind)
    }

    pub fn update_balance(
        &mut self,
        manager: BalanceManager,
        amount: f64,
    ) -> Result<(), BalanceError> {
        self.game_state.update_balance(manager, amount)
    }

    /// Draw the next customer's order from the menu
    pub fn next_order(&mut self) -> Option<Order> {
        let recipes = self.menu.recipes().to_vec();
        self.choose_random(&recipes).cloned().map(Order::new)
    }

    /// Hand a pizza to the customer.
    /// A matching pizza is paid at the recipe price; returns whether it was.
    pub fn serve(&mut self, pizza: &Pizza, order: &Order) -> Result<bool, BalanceError> {
        if !pizza.matches_recipe(&order.recipe) {
            self.pizzas_rejected += 1;
            info!(
                "Customer refused {:?}, wanted {}",
                pizza.ingredient_names(),
                order.recipe.name
            );
            return Ok(false);
        }

        self.game_state
            .update_balance(self.sales, order.recipe.price)?;
        self.pizzas_sold += 1;
        Ok(true)
    }

    pub fn hour(&self) -> u32 {
        self.clock.hour()
    }

    pub fn minute(&self) -> u32 {
        self.clock.minute()
    }

    pub fn time(&self) -> ClockTime {
        self.clock.time()
    }

    pub fn clock_phase(&self) -> ClockPhase {
        self.clock.phase()
    }

    pub fn is_open(&self) -> bool {
        self.clock.is_running()
    }

    pub fn working_days(&self) -> u32 {
        self.game_state.working_days()
    }

    pub fn balance_day(&self) -> f64 {
        self.game_state.balance_day()
    }

    pub fn balance_total(&self) -> f64 {
        self.game_state.balance_total()
    }

    pub fn stock(&self, kind: IngredientKind) -> i32 {
        self.kitchen.stock(kind)
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "{} | Time: {} | Sold: {} | Refused: {}",
            self.game_state.summary(),
            self.clock.time(),
            self.pizzas_sold,
            self.pizzas_rejected
        )
    }

    pub fn print_summary(&self) {
        println!("=== Pizzeria Summary ===");
        println!("{}", self.summary());
        println!("--- Stock ---");
        for ingredient in self.kitchen.ingredients() {
            println!(
                "  {:<15} {:>4}  (${:.2} per restock)",
                ingredient.to_string(),
                ingredient.quantity(),
                ingredient.price()
            );
        }
    }
}

/// Shared handle used by the timer thread and every other caller.
/// All access is serialized through one mutex.
#[derive(Clone)]
pub struct PizzeriaHandle(Arc<Mutex<SimPizzeria>>);

impl PizzeriaHandle {
    pub fn new(pizzeria: SimPizzeria) -> Self {
        Self(Arc::new(Mutex::new(pizzeria)))
    }

    /// Lock the pizzeria. A poisoned lock is recovered; every method leaves
    /// the state consistent between calls.
    pub fn lock(&self) -> MutexGuard<'_, SimPizzeria> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<SimPizzeria> for PizzeriaHandle {
    fn from(pizzeria: SimPizzeria) -> Self {
        Self::new(pizzeria)
    }
}
