//! Error types for the pizzeria simulation

use super::types::IngredientKind;

/// A balance update was rejected; the ledger is unchanged
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BalanceError {
    #[error("invalid amount {amount}: {reason}")]
    InvalidArgument { amount: f64, reason: &'static str },
}

/// Kitchen operations that can be refused
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KitchenError {
    #[error("{0} is out of stock")]
    OutOfStock(IngredientKind),

    #[error(transparent)]
    Balance(#[from] BalanceError),
}
