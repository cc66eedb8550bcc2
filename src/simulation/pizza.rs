//! Pizza assembly

use std::collections::BTreeSet;

use super::error::KitchenError;
use super::kitchen::PreparationZone;
use super::menu::Recipe;
use super::types::IngredientKind;

/// A pizza being put together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pizza {
    added: Vec<IngredientKind>,
}

impl Pizza {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a portion from the zone and put it on the pizza.
    /// Nothing is added when the zone refuses.
    pub fn add_ingredient(
        &mut self,
        zone: &mut PreparationZone,
        kind: IngredientKind,
    ) -> Result<(), KitchenError> {
        zone.take(kind)?;
        self.added.push(kind);
        Ok(())
    }

    /// Ingredients in the order they were added, duplicates included
    pub fn added_ingredients(&self) -> &[IngredientKind] {
        &self.added
    }

    pub fn ingredient_names(&self) -> Vec<&'static str> {
        self.added.iter().map(|kind| kind.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
    }

    /// Compare against requested ingredient names, ignoring order and
    /// repeats
    pub fn matches<S: AsRef<str>>(&self, requested: &[S]) -> bool {
        let made: BTreeSet<&str> = self.added.iter().map(|kind| kind.name()).collect();
        let wanted: BTreeSet<&str> = requested.iter().map(|name| name.as_ref()).collect();
        made == wanted
    }

    pub fn matches_recipe(&self, recipe: &Recipe) -> bool {
        let made: BTreeSet<IngredientKind> = self.added.iter().copied().collect();
        let wanted: BTreeSet<IngredientKind> = recipe.ingredients.iter().copied().collect();
        made == wanted
    }
}
