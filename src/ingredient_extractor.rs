//! # Ingredient Extractor
//!
//! This module derives the ordered ingredient list of a recipe record from its
//! fifteen `strIngredient{i}` / `strMeasure{i}` slot pairs.
//!
//! Slots are visited strictly in index order. A slot whose name is missing,
//! `null` or empty is skipped; its measure may be `null` independently of the
//! name being present.
//!
//! ## Usage
//!
//! ```rust
//! use cocktails::ingredient_extractor::extract_ingredients;
//! use cocktails::recipe_model::RecipeRecord;
//!
//! let record = RecipeRecord::new("Gimlet")
//!     .with_ingredient(1, "Gin", Some("2 oz"))
//!     .with_ingredient(3, "Lime juice", Some("3/4 oz"));
//!
//! let ingredients = extract_ingredients(&record);
//! assert_eq!(ingredients.len(), 2);
//! assert_eq!(ingredients[1].canonical(), "3/4 oz Lime juice");
//! ```

use log::{debug, trace};

use crate::recipe_model::{Ingredient, RecipeRecord, MAX_INGREDIENT_SLOTS};

/// Extract the present ingredients of a record, in slot order
pub fn extract_ingredients(record: &RecipeRecord) -> Vec<Ingredient> {
    let ingredients: Vec<Ingredient> = (1..=MAX_INGREDIENT_SLOTS)
        .filter_map(|slot| extract_slot(record, slot))
        .collect();

    debug!(
        "Extracted {} ingredients from recipe '{}'",
        ingredients.len(),
        record.name
    );
    ingredients
}

fn extract_slot(record: &RecipeRecord, slot: usize) -> Option<Ingredient> {
    if !record.has_ingredient(slot) {
        trace!("Slot {} of '{}' is empty, skipping", slot, record.name);
        return None;
    }

    let name = record.ingredient(slot)?;
    Some(Ingredient {
        name: name.to_string(),
        measure: record.measure(slot).map(str::to_string),
    })
}

/// Canonical shopping-list strings of a record's ingredients, in slot order
pub fn canonical_ingredients(record: &RecipeRecord) -> Vec<String> {
    extract_ingredients(record)
        .iter()
        .map(Ingredient::canonical)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_preserves_slot_order() {
        let record = RecipeRecord::new("Daiquiri")
            .with_ingredient(3, "Powdered sugar", Some("1 tsp"))
            .with_ingredient(1, "Light rum", Some("1 1/2 oz"))
            .with_ingredient(2, "Lime", Some("Juice of 1/2"));

        let names: Vec<String> = extract_ingredients(&record)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Light rum", "Lime", "Powdered sugar"]);
    }

    #[test]
    fn test_extract_skips_empty_and_null_names() {
        let mut record = RecipeRecord::new("Test")
            .with_ingredient(1, "Vodka", Some("1 oz"))
            .with_ingredient(2, "", Some("2 oz"))
            .with_ingredient(4, "Ice", None);
        record
            .fields
            .insert("strIngredient3".to_string(), serde_json::Value::Null);

        let ingredients = extract_ingredients(&record);
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0], Ingredient::new("Vodka").with_measure("1 oz"));
        assert_eq!(ingredients[1], Ingredient::new("Ice"));
    }

    #[test]
    fn test_slots_beyond_fifteen_are_ignored() {
        let record = RecipeRecord::new("Overflow")
            .with_ingredient(15, "Last", None)
            .with_ingredient(16, "Extra", None);

        let ingredients = extract_ingredients(&record);
        assert_eq!(ingredients, vec![Ingredient::new("Last")]);
    }

    #[test]
    fn test_canonical_ingredients() {
        let record = RecipeRecord::new("Negroni")
            .with_ingredient(1, "Gin", Some("1 oz"))
            .with_ingredient(2, "Orange peel", None);

        assert_eq!(canonical_ingredients(&record), vec!["1 oz Gin", "Orange peel"]);
    }

    #[test]
    fn test_empty_record() {
        assert!(extract_ingredients(&RecipeRecord::default()).is_empty());
    }
}
