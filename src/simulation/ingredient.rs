//! Ingredient stock tracking
//!
//! One `Ingredient` tracks how much of a single variant is left.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::types::{IngredientKind, MAX_QUANTITY};

/// Stock of a single ingredient variant
#[derive(Debug, Clone)]
pub struct Ingredient {
    kind: IngredientKind,
    quantity: i32,
}

impl Ingredient {
    /// Create an ingredient at full stock
    pub fn new(kind: IngredientKind) -> Self {
        Self {
            kind,
            quantity: MAX_QUANTITY,
        }
    }

    pub fn kind(&self) -> IngredientKind {
        self.kind
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.kind.price()
    }

    pub fn reduce_amount(&self) -> i32 {
        self.kind.reduce_amount()
    }

    pub fn asset_name(&self) -> &'static str {
        self.kind.asset_name()
    }

    /// Refill to the max quantity
    pub fn supply(&mut self) {
        self.quantity = MAX_QUANTITY;
    }

    /// Consume one portion.
    /// Unchecked: repeated calls without `supply` go below zero.
    pub fn reduce(&mut self) {
        self.quantity -= self.kind.reduce_amount();
    }

    /// True when less than one portion is left
    pub fn needs_restock(&self) -> bool {
        self.quantity < self.kind.reduce_amount()
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}

impl From<IngredientKind> for Ingredient {
    fn from(kind: IngredientKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
