//! Game mechanics validation test
//!
//! This test validates that the game mechanics work correctly

use std::time::Duration;

use pizzeria_sim::simulation::{
    ticks_per_day, BalanceError, BalanceManager, ClockPhase, DailyTarget, DayTimer, GameConfig,
    GameState, Ingredient, IngredientKind, KitchenError, Ledger, Pizza, PizzeriaHandle,
    PreparationZone, SimPizzeria, TickOutcome, FIRST_WORKING_DAY, MAX_QUANTITY,
};
use IngredientKind::*;

const DELTA: f64 = 0.001;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < DELTA
}

#[test]
fn test_ingredients_start_full_and_supply_refills() {
    for kind in IngredientKind::ALL {
        let mut ingredient = Ingredient::new(kind);
        assert_eq!(ingredient.quantity(), MAX_QUANTITY);

        ingredient.reduce();
        ingredient.reduce();
        ingredient.supply();
        assert_eq!(ingredient.quantity(), MAX_QUANTITY);
    }
}

#[test]
fn test_reduce_subtracts_the_variant_step() {
    for kind in IngredientKind::ALL {
        let mut ingredient = Ingredient::new(kind);
        ingredient.reduce();
        assert_eq!(ingredient.quantity(), MAX_QUANTITY - kind.reduce_amount());
    }
}

#[test]
fn test_reduce_can_go_below_zero() {
    let mut fries = Ingredient::new(FrenchFry);
    for _ in 0..6 {
        fries.reduce();
    }
    // 100 - 6 * 17
    assert_eq!(fries.quantity(), -2);
    assert!(fries.needs_restock());
}

#[test]
fn test_ingredient_equality_is_by_variant() {
    let mut used = Ingredient::new(Mozzarella);
    used.reduce();
    assert_eq!(used, Ingredient::new(Mozzarella));
    assert_ne!(Ingredient::new(Ham), Ingredient::new(Onion));
    assert_eq!(Ingredient::new(Mozzarella).to_string(), "Mozzarella");
    assert_eq!(Ingredient::new(Ham).asset_name(), "Ham.png");
    assert!(approx(Ingredient::new(FrenchFry).price(), 1.5));
}

#[test]
fn test_adder_manager_amounts() {
    let mut ledger = Ledger::new();
    BalanceManager::Adder.update_balance(&mut ledger, 10.0).unwrap();
    assert!(approx(ledger.balance_day(), 10.0));

    let mut ledger = Ledger::new();
    BalanceManager::Adder.update_balance(&mut ledger, 3.15).unwrap();
    assert!(approx(ledger.balance_day(), 3.15));
}

#[test]
fn test_adder_manager_rejects_invalid_amounts() {
    let mut ledger = Ledger::new();
    assert!(matches!(
        BalanceManager::Adder.update_balance(&mut ledger, -10.0),
        Err(BalanceError::InvalidArgument { .. })
    ));
    assert!(matches!(
        BalanceManager::Adder.update_balance(&mut ledger, f64::NAN),
        Err(BalanceError::InvalidArgument { .. })
    ));
    assert_eq!(ledger.balance_day(), 0.0);
}

#[test]
fn test_clock_through_a_day() {
    let mut pizzeria = SimPizzeria::default();
    assert_eq!(pizzeria.tick(), TickOutcome::Idle);

    pizzeria.start_new_day();
    assert_eq!((pizzeria.hour(), pizzeria.minute()), (10, 0));

    pizzeria.tick();
    assert_eq!((pizzeria.hour(), pizzeria.minute()), (10, 15));

    for _ in 0..3 {
        pizzeria.tick();
    }
    assert_eq!((pizzeria.hour(), pizzeria.minute()), (11, 0));

    let mut closed_at = None;
    for tick in 5..=ticks_per_day() {
        if let TickOutcome::DayClosed(_) = pizzeria.tick() {
            closed_at = Some(tick);
            break;
        }
        assert!(pizzeria.is_open());
    }
    assert_eq!(closed_at, Some(ticks_per_day()));
    assert_eq!((pizzeria.hour(), pizzeria.minute()), (22, 30));
    assert_eq!(pizzeria.clock_phase(), ClockPhase::Closed);
}

#[test]
fn test_day_rollover_pass_and_fail() {
    let state = GameState::new(DailyTarget::new(20.0, 0.0));
    let mut pizzeria = SimPizzeria::with_game_state(state);

    pizzeria.start_new_day();
    pizzeria.update_balance(BalanceManager::Adder, 25.0).unwrap();
    let report = pizzeria.run_day();
    assert!(report.passed);
    assert_eq!(report.day, FIRST_WORKING_DAY);
    assert_eq!(pizzeria.working_days(), FIRST_WORKING_DAY + 1);
    assert!(approx(pizzeria.balance_total(), 25.0));
    assert_eq!(pizzeria.balance_day(), 0.0);

    pizzeria.start_new_day();
    pizzeria.update_balance(BalanceManager::Adder, 5.0).unwrap();
    let report = pizzeria.run_day();
    assert!(!report.passed);
    assert_eq!(pizzeria.working_days(), FIRST_WORKING_DAY + 1);
    assert!(approx(pizzeria.balance_total(), 25.0));
    assert_eq!(pizzeria.balance_day(), 0.0);
}

#[test]
fn test_adding_ingredients_keeps_duplicates() {
    let mut zone = PreparationZone::new();
    let mut pizza = Pizza::new();
    pizza.add_ingredient(&mut zone, Dough).unwrap();
    assert_eq!(pizza.added_ingredients(), &[Dough]);

    pizza.add_ingredient(&mut zone, TomatoSauce).unwrap();
    pizza.add_ingredient(&mut zone, Mozzarella).unwrap();
    pizza.add_ingredient(&mut zone, FrenchFry).unwrap();
    pizza.add_ingredient(&mut zone, FrenchFry).unwrap();
    assert_eq!(
        pizza.added_ingredients(),
        &[Dough, TomatoSauce, Mozzarella, FrenchFry, FrenchFry]
    );
}

#[test]
fn test_prepared_pizza_matches_requested_one() {
    let requested: Vec<String> = [Dough, TomatoSauce, Mozzarella, Ham, Mushroom]
        .iter()
        .map(|kind| kind.to_string())
        .collect();
    let mut zone = PreparationZone::new();
    let mut pizza = Pizza::new();

    pizza.add_ingredient(&mut zone, Dough).unwrap();
    pizza.add_ingredient(&mut zone, TomatoSauce).unwrap();
    pizza.add_ingredient(&mut zone, Mozzarella).unwrap();
    assert!(!pizza.matches(&requested));

    pizza.add_ingredient(&mut zone, Mushroom).unwrap();
    pizza.add_ingredient(&mut zone, Ham).unwrap();
    assert!(pizza.matches(&requested));

    pizza.add_ingredient(&mut zone, Mushroom).unwrap();
    assert!(pizza.matches(&requested));

    pizza.add_ingredient(&mut zone, Olive).unwrap();
    assert!(!pizza.matches(&requested));
}

#[test]
fn test_serving_pays_only_for_matching_pizzas() {
    let mut pizzeria = SimPizzeria::new_with_seed(7);
    let order = pizzeria.next_order().expect("standard menu has recipes");

    let mut pizza = Pizza::new();
    for &kind in &order.recipe.ingredients {
        pizzeria.add_to_pizza(&mut pizza, kind).unwrap();
    }
    assert!(pizzeria.serve(&pizza, &order).unwrap());
    assert!(approx(pizzeria.balance_day(), order.recipe.price));

    let empty = Pizza::new();
    assert!(!pizzeria.serve(&empty, &order).unwrap());
    assert!(approx(pizzeria.balance_day(), order.recipe.price));
    assert_eq!(pizzeria.pizzas_sold, 1);
    assert_eq!(pizzeria.pizzas_rejected, 1);
}

#[test]
fn test_seeded_orders_are_reproducible() {
    let mut first = SimPizzeria::new_with_seed(42);
    let mut second = SimPizzeria::new_with_seed(42);
    for _ in 0..10 {
        assert_eq!(first.next_order(), second.next_order());
    }
}

#[test]
fn test_out_of_stock_then_restock() {
    let mut pizzeria = SimPizzeria::default();
    let mut pizza = Pizza::new();
    while pizzeria.add_to_pizza(&mut pizza, Ham).is_ok() {}
    assert_eq!(
        pizzeria.add_to_pizza(&mut pizza, Ham),
        Err(KitchenError::OutOfStock(Ham))
    );

    pizzeria.restock(Ham).unwrap();
    assert_eq!(pizzeria.stock(Ham), MAX_QUANTITY);
    assert!(approx(pizzeria.balance_day(), -Ham.price()));
    assert!(pizzeria.add_to_pizza(&mut pizza, Ham).is_ok());
}

#[test]
fn test_timer_closes_the_day() {
    let config = GameConfig {
        daily_target: 1.0,
        target_increase: 0.0,
        ..GameConfig::default()
    };
    let handle = PizzeriaHandle::new(SimPizzeria::new(&config));
    handle
        .lock()
        .update_balance(BalanceManager::Adder, 3.0)
        .unwrap();

    let timer = DayTimer::start(handle.clone(), Duration::from_millis(1));
    let report = timer.join().expect("day should reach closing time");

    assert!(report.passed);
    let pizzeria = handle.lock();
    assert_eq!(pizzeria.working_days(), FIRST_WORKING_DAY + 1);
    assert!(approx(pizzeria.balance_total(), 3.0));
    assert_eq!(pizzeria.balance_day(), 0.0);
    assert_eq!(pizzeria.clock_phase(), ClockPhase::Closed);
}

#[test]
fn test_timer_stop_cuts_the_day_short() {
    let handle = PizzeriaHandle::new(SimPizzeria::default());
    let timer = DayTimer::start(handle.clone(), Duration::from_secs(60));
    assert!(timer.stop().is_none());

    let pizzeria = handle.lock();
    assert!(pizzeria.is_open());
    assert_eq!((pizzeria.hour(), pizzeria.minute()), (10, 0));
    assert_eq!(pizzeria.working_days(), FIRST_WORKING_DAY);
}

#[test]
fn test_balance_updates_race_the_timer_safely() {
    let config = GameConfig {
        daily_target: 0.0,
        target_increase: 0.0,
        ..GameConfig::default()
    };
    let handle = PizzeriaHandle::new(SimPizzeria::new(&config));
    let timer = DayTimer::start(handle.clone(), Duration::from_millis(1));

    let mut credited = 0.0;
    while !timer.is_finished() {
        {
            let mut pizzeria = handle.lock();
            if pizzeria.is_open() {
                pizzeria.update_balance(BalanceManager::Adder, 1.0).unwrap();
                credited += 1.0;
            }
        }
        std::thread::sleep(Duration::from_micros(200));
    }
    timer.join().expect("day should reach closing time");

    // Every credit landed before closing, so all of it was folded
    let pizzeria = handle.lock();
    assert!(approx(pizzeria.balance_total(), credited));
    assert_eq!(pizzeria.balance_day(), 0.0);
}
