//! Core types for the pizzeria simulation
//!
//! The closed set of ingredient variants and their fixed constants.

use std::fmt;

/// The max quantity for each ingredient
pub const MAX_QUANTITY: i32 = 100;

/// One of the fixed set of pizza ingredients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IngredientKind {
    Dough,
    TomatoSauce,
    Mozzarella,
    Ham,
    Mushroom,
    Olive,
    CherryTomato,
    FrenchFry,
    Onion,
}

impl IngredientKind {
    /// Every variant, in display order
    pub const ALL: [IngredientKind; 9] = [
        IngredientKind::Dough,
        IngredientKind::TomatoSauce,
        IngredientKind::Mozzarella,
        IngredientKind::Ham,
        IngredientKind::Mushroom,
        IngredientKind::Olive,
        IngredientKind::CherryTomato,
        IngredientKind::FrenchFry,
        IngredientKind::Onion,
    ];

    /// Price paid for a restock
    pub const fn price(self) -> f64 {
        match self {
            IngredientKind::Dough => 0.5,
            IngredientKind::TomatoSauce => 0.4,
            IngredientKind::Mozzarella => 0.6,
            IngredientKind::Ham => 0.8,
            IngredientKind::Mushroom => 0.7,
            IngredientKind::Olive => 0.6,
            IngredientKind::CherryTomato => 0.9,
            IngredientKind::FrenchFry => 1.5,
            IngredientKind::Onion => 1.0,
        }
    }

    /// Units consumed each time the ingredient goes on a pizza
    pub const fn reduce_amount(self) -> i32 {
        match self {
            IngredientKind::Dough => 10,
            IngredientKind::TomatoSauce => 10,
            IngredientKind::Mozzarella => 10,
            IngredientKind::Ham => 6,
            IngredientKind::Mushroom => 8,
            IngredientKind::Olive => 5,
            IngredientKind::CherryTomato => 8,
            IngredientKind::FrenchFry => 17,
            IngredientKind::Onion => 8,
        }
    }

    /// Asset name identifying the variant. A renderer resolves it to an image.
    pub const fn asset_name(self) -> &'static str {
        match self {
            IngredientKind::Dough => "Dough.png",
            IngredientKind::TomatoSauce => "TomatoSauce.png",
            IngredientKind::Mozzarella => "Mozzarella.png",
            IngredientKind::Ham => "Ham.png",
            IngredientKind::Mushroom => "Mushrooms.png",
            IngredientKind::Olive => "Olives.png",
            IngredientKind::CherryTomato => "CherryTomatoes.png",
            IngredientKind::FrenchFry => "FrenchFries.png",
            IngredientKind::Onion => "Onions.png",
        }
    }

    /// Human-readable name: the asset name without its extension
    pub fn name(self) -> &'static str {
        let asset = self.asset_name();
        match asset.split_once('.') {
            Some((stem, _)) => stem,
            None => asset,
        }
    }
}

impl fmt::Display for IngredientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Simulated time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
