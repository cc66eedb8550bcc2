//! Menu of pizzas customers can order

use super::types::IngredientKind;
use IngredientKind::*;

/// A pizza on the menu
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: &'static str,
    pub ingredients: Vec<IngredientKind>,
    /// Sale price
    pub price: f64,
}

impl Recipe {
    pub fn new(name: &'static str, ingredients: &[IngredientKind], price: f64) -> Self {
        Self {
            name,
            ingredients: ingredients.to_vec(),
            price,
        }
    }

    pub fn ingredient_names(&self) -> Vec<&'static str> {
        self.ingredients.iter().map(|kind| kind.name()).collect()
    }
}

/// A customer's request
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub recipe: Recipe,
}

impl Order {
    pub fn new(recipe: Recipe) -> Self {
        Self { recipe }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    recipes: Vec<Recipe>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::standard()
    }
}

impl Menu {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The house menu
    pub fn standard() -> Self {
        Self::new(vec![
            Recipe::new("Margherita", &[Dough, TomatoSauce, Mozzarella], 5.0),
            Recipe::new("Prosciutto", &[Dough, TomatoSauce, Mozzarella, Ham], 6.5),
            Recipe::new("Funghi", &[Dough, TomatoSauce, Mozzarella, Mushroom], 6.0),
            Recipe::new(
                "Capricciosa",
                &[Dough, TomatoSauce, Mozzarella, Ham, Mushroom, Olive],
                8.0,
            ),
            Recipe::new("Americana", &[Dough, TomatoSauce, Mozzarella, FrenchFry], 7.0),
            Recipe::new(
                "Ortolana",
                &[Dough, TomatoSauce, Mozzarella, CherryTomato, Onion],
                7.5,
            ),
        ])
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
