use std::thread;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::info;

use pizzeria_sim::simulation::{
    DayTimer, GameConfig, IngredientKind, KitchenError, Pizza, PizzeriaHandle, SimPizzeria,
    TickOutcome, DEFAULT_DAILY_TARGET, DEFAULT_TARGET_INCREASE,
};

#[derive(Parser)]
#[command(name = "pizzeria_sim")]
#[command(about = "Pizzeria management simulation, played headless")]
struct Cli {
    /// Number of working days to play
    #[arg(long, default_value = "3")]
    days: u32,

    /// Real milliseconds per 15 simulated minutes (0 steps as fast as possible)
    #[arg(long, default_value = "0")]
    tick_ms: u64,

    /// Seed for reproducible customer orders
    #[arg(long)]
    seed: Option<u64>,

    /// Balance needed to pass the first day
    #[arg(long, default_value_t = DEFAULT_DAILY_TARGET)]
    daily_target: f64,

    /// Raise of the daily target for every passed day
    #[arg(long, default_value_t = DEFAULT_TARGET_INCREASE)]
    target_increase: f64,

    /// Probability that the cook puts a wrong ingredient on a pizza
    #[arg(long, default_value = "0.1")]
    mistake_rate: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,pizzeria_sim=info"),
    )
    .init();

    let cli = Cli::parse();
    ensure!(
        (0.0..=1.0).contains(&cli.mistake_rate),
        "--mistake-rate must be between 0 and 1, got {}",
        cli.mistake_rate
    );
    ensure!(cli.daily_target.is_finite(), "--daily-target must be finite");
    ensure!(cli.target_increase.is_finite(), "--target-increase must be finite");

    let config = GameConfig {
        tick_period: Duration::from_millis(cli.tick_ms),
        daily_target: cli.daily_target,
        target_increase: cli.target_increase,
        seed: cli.seed,
    };

    info!(
        "Running pizzeria for {} days (daily target ${:.2}, +${:.2} per passed day)",
        cli.days, config.daily_target, config.target_increase
    );

    let pizzeria = SimPizzeria::new(&config);
    let pizzeria = if cli.tick_ms == 0 {
        run_stepped(pizzeria, cli.days, cli.mistake_rate)?
    } else {
        run_realtime(pizzeria, &config, cli.days, cli.mistake_rate)?
    };

    info!("=== GAME OVER ===");
    info!("Working days: {}", pizzeria.working_days());
    info!("Total balance: ${:.2}", pizzeria.balance_total());
    info!("Pizzas sold: {}", pizzeria.pizzas_sold);
    info!("Pizzas refused: {}", pizzeria.pizzas_rejected);
    pizzeria.print_summary();
    Ok(())
}

/// Step the clock directly, serving one customer per tick
fn run_stepped(mut pizzeria: SimPizzeria, days: u32, mistake_rate: f64) -> Result<SimPizzeria> {
    for _ in 0..days {
        pizzeria.start_new_day();
        loop {
            serve_customer(&mut pizzeria, mistake_rate)?;
            if let TickOutcome::DayClosed(_) = pizzeria.tick() {
                break;
            }
        }
    }
    Ok(pizzeria)
}

/// Let a `DayTimer` drive the clock while this thread plays the counter
fn run_realtime(
    pizzeria: SimPizzeria,
    config: &GameConfig,
    days: u32,
    mistake_rate: f64,
) -> Result<SimPizzeria> {
    let handle = PizzeriaHandle::new(pizzeria);

    for _ in 0..days {
        let timer = DayTimer::start(handle.clone(), config.tick_period);
        while !timer.is_finished() {
            {
                let mut pizzeria = handle.lock();
                if pizzeria.is_open() {
                    serve_customer(&mut pizzeria, mistake_rate)?;
                }
            }
            thread::sleep(config.tick_period / 2);
        }
        timer.join().context("day ended before closing time")?;
    }

    let pizzeria = std::mem::take(&mut *handle.lock());
    Ok(pizzeria)
}

/// Take an order, make the pizza and hand it over
fn serve_customer(pizzeria: &mut SimPizzeria, mistake_rate: f64) -> Result<()> {
    let order = pizzeria.next_order().context("menu is empty")?;

    let mut pizza = Pizza::new();
    for &kind in &order.recipe.ingredients {
        add_or_restock(pizzeria, &mut pizza, kind)?;
    }

    if pizzeria.random_range(0.0..1.0) < mistake_rate {
        let wrong: Vec<IngredientKind> = IngredientKind::ALL
            .into_iter()
            .filter(|kind| !order.recipe.ingredients.contains(kind))
            .collect();
        if !wrong.is_empty() {
            let index = (pizzeria.random_range(0.0..1.0) * wrong.len() as f64) as usize;
            add_or_restock(pizzeria, &mut pizza, wrong[index.min(wrong.len() - 1)])?;
        }
    }

    pizzeria
        .serve(&pizza, &order)
        .with_context(|| format!("failed to serve {}", order.recipe.name))?;
    Ok(())
}

fn add_or_restock(pizzeria: &mut SimPizzeria, pizza: &mut Pizza, kind: IngredientKind) -> Result<()> {
    match pizzeria.add_to_pizza(pizza, kind) {
        Err(KitchenError::OutOfStock(_)) => {
            pizzeria
                .restock(kind)
                .with_context(|| format!("failed to restock {}", kind))?;
            pizzeria
                .add_to_pizza(pizza, kind)
                .with_context(|| format!("failed to add {} after restocking", kind))
        }
        other => other.with_context(|| format!("failed to add {}", kind)),
    }
}
