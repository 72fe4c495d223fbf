//! # Recipe Card View Model
//!
//! Everything a presenter needs to render one search result: display strings
//! with measures converted to the current measurement system, per-ingredient
//! highlight flags and whether the "add all" action is still available.

use serde::Serialize;

use crate::ingredient_extractor::extract_ingredients;
use crate::measurement_converter::MeasurementConverter;
use crate::measurement_types::MeasurementSystem;
use crate::recipe_model::{Ingredient, RecipeRecord};
use crate::shopping_list::{CardState, ShoppingList};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCard {
    pub name: String,
    pub image_url: String,
    pub description: String,
    /// Display strings, one per extracted ingredient
    pub ingredients: Vec<String>,
    /// Whether each ingredient's canonical string is on the shopping list
    pub in_shopping_list: Vec<bool>,
    #[serde(skip)]
    pub state: CardState,
    #[serde(skip)]
    pub extracted: Vec<Ingredient>,
}

impl RecipeCard {
    /// Build the card for `record` against the current list and measurement system
    pub fn build(
        record: &RecipeRecord,
        list: &ShoppingList,
        system: MeasurementSystem,
        converter: &MeasurementConverter,
    ) -> Self {
        let extracted = extract_ingredients(record);

        Self {
            name: record.name.clone(),
            image_url: record.image_url.clone().unwrap_or_default(),
            description: record.instructions.clone().unwrap_or_default(),
            ingredients: extracted
                .iter()
                .map(|ingredient| ingredient.display_with(system, converter))
                .collect(),
            in_shopping_list: list.membership(&extracted),
            state: list.card_state(&extracted),
            extracted,
        }
    }

    /// Whether the "add all" affordance is enabled
    pub fn can_add(&self) -> bool {
        self.state == CardState::NotAdded
    }
}
