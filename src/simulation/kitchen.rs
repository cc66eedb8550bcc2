//! Preparation zone: the kitchen's ingredient stock
//!
//! Pizzas take portions from here; restocking is paid from the daily
//! balance.

use std::collections::HashMap;

use log::{info, warn};

use super::balance::BalanceManager;
use super::error::KitchenError;
use super::game_state::GameState;
use super::ingredient::Ingredient;
use super::types::IngredientKind;

/// Stock of every ingredient variant
#[derive(Debug, Clone)]
pub struct PreparationZone {
    stock: HashMap<IngredientKind, Ingredient>,
    /// Pays for restocks
    purchases: BalanceManager,
}

impl Default for PreparationZone {
    fn default() -> Self {
        Self::new()
    }
}

impl PreparationZone {
    /// Create a zone with every ingredient at full stock
    pub fn new() -> Self {
        let stock = IngredientKind::ALL
            .iter()
            .map(|&kind| (kind, Ingredient::new(kind)))
            .collect();
        Self {
            stock,
            purchases: BalanceManager::Subtractor,
        }
    }

    fn ingredient_mut(&mut self, kind: IngredientKind) -> &mut Ingredient {
        self.stock.entry(kind).or_insert_with(|| Ingredient::new(kind))
    }

    /// Take one portion of an ingredient.
    /// Refuses when less than a portion is left.
    pub fn take(&mut self, kind: IngredientKind) -> Result<(), KitchenError> {
        let ingredient = self.ingredient_mut(kind);
        if ingredient.needs_restock() {
            warn!("{} is out of stock ({} left)", kind, ingredient.quantity());
            return Err(KitchenError::OutOfStock(kind));
        }
        ingredient.reduce();
        Ok(())
    }

    /// Refill an ingredient and pay its price
    pub fn restock(
        &mut self,
        kind: IngredientKind,
        state: &mut GameState,
    ) -> Result<(), KitchenError> {
        state.update_balance(self.purchases, kind.price())?;
        self.ingredient_mut(kind).supply();
        info!("Restocked {} for ${:.2}", kind, kind.price());
        Ok(())
    }

    /// Current quantity of an ingredient
    pub fn stock(&self, kind: IngredientKind) -> i32 {
        self.stock.get(&kind).map_or(0, Ingredient::quantity)
    }

    pub fn ingredient(&self, kind: IngredientKind) -> Option<&Ingredient> {
        self.stock.get(&kind)
    }

    /// All ingredients, in display order
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        IngredientKind::ALL
            .iter()
            .filter_map(move |kind| self.stock.get(kind))
    }

    /// Variants that cannot provide another portion
    pub fn out_of_stock(&self) -> Vec<IngredientKind> {
        self.ingredients()
            .filter(|ingredient| ingredient.needs_restock())
            .map(Ingredient::kind)
            .collect()
    }
}
