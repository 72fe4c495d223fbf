//! # Recipe and Ingredient Data Model
//!
//! This module defines data structures for recipe records as returned by the
//! public cocktail catalog, and the ingredients derived from them.
//!
//! ## Core Concepts
//!
//! - **RecipeRecord**: one drink from a search response, with up to 15 paired
//!   `strIngredient{i}` / `strMeasure{i}` slots
//! - **Ingredient**: a name with an optional free-text measure
//! - **Canonical string**: `measure + " " + name` (or the name alone), the sole
//!   identity used for shopping-list membership
//!
//! ## Usage
//!
//! ```rust
//! use cocktails::recipe_model::{Ingredient, RecipeRecord};
//!
//! let record = RecipeRecord::new("Margarita")
//!     .with_ingredient(1, "Tequila", Some("1 1/2 oz"))
//!     .with_ingredient(2, "Salt", None);
//!
//! assert_eq!(record.ingredient(1), Some("Tequila"));
//! assert_eq!(Ingredient::new("Salt").canonical(), "Salt");
//! ```

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::measurement_converter::MeasurementConverter;
use crate::measurement_types::MeasurementSystem;

/// Number of ingredient/measure slot pairs in a recipe record
pub const MAX_INGREDIENT_SLOTS: usize = 15;

/// A drink as returned by the recipe catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Catalog identifier
    #[serde(rename = "idDrink", default)]
    pub id: Option<String>,

    /// Display name of the drink
    #[serde(rename = "strDrink", default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Thumbnail image URL
    #[serde(rename = "strDrinkThumb", default)]
    pub image_url: Option<String>,

    /// Preparation instructions (English)
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,

    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,

    #[serde(rename = "strAlcoholic", default)]
    pub alcoholic: Option<String>,

    #[serde(rename = "strGlass", default)]
    pub glass: Option<String>,

    /// Every other field of the record, including the ingredient and measure slots
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// An ingredient derived from a recipe record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    /// The name of the ingredient (e.g., "Tequila", "Lime juice")
    pub name: String,

    /// Optional free-text measure (e.g., "1 1/2 oz", "Juice of 1")
    pub measure: Option<String>,
}

/// Body of a catalog search response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching drinks; `null` (or a "no data found" string) when nothing matched
    #[serde(default, deserialize_with = "drinks_or_empty")]
    pub drinks: Option<Vec<RecipeRecord>>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn drinks_or_empty<'de, D>(deserializer: D) -> Result<Option<Vec<RecipeRecord>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null | Value::String(_) => Ok(None),
        drinks @ Value::Array(_) => serde_json::from_value(drinks)
            .map(Some)
            .map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "expected a list of drinks, found {other}"
        ))),
    }
}

fn ingredient_key(slot: usize) -> String {
    format!("strIngredient{slot}")
}

fn measure_key(slot: usize) -> String {
    format!("strMeasure{slot}")
}

impl RecipeRecord {
    /// Create a record with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Fill one 1-based ingredient slot
    pub fn with_ingredient(mut self, slot: usize, name: &str, measure: Option<&str>) -> Self {
        self.fields
            .insert(ingredient_key(slot), Value::String(name.to_string()));
        self.fields.insert(
            measure_key(slot),
            measure.map_or(Value::Null, |m| Value::String(m.to_string())),
        );
        self
    }

    /// Set the preparation instructions
    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.instructions = Some(instructions.to_string());
        self
    }

    /// Set the thumbnail URL
    pub fn with_image_url(mut self, image_url: &str) -> Self {
        self.image_url = Some(image_url.to_string());
        self
    }

    fn slot_text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Ingredient name in a 1-based slot, if the field holds a string
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.slot_text(&ingredient_key(slot))
    }

    /// Measure in a 1-based slot, if the field holds a string
    pub fn measure(&self, slot: usize) -> Option<&str> {
        self.slot_text(&measure_key(slot))
    }

    /// Whether a slot counts as present: non-null, non-empty name
    pub fn has_ingredient(&self, slot: usize) -> bool {
        self.ingredient(slot).is_some_and(|name| !name.is_empty())
    }
}

impl Ingredient {
    /// Create a new ingredient with just a name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            measure: None,
        }
    }

    /// Add a measure to this ingredient
    pub fn with_measure(mut self, measure: &str) -> Self {
        self.measure = Some(measure.to_string());
        self
    }

    /// Check if this ingredient has a non-empty measure
    pub fn has_measure(&self) -> bool {
        self.measure.as_deref().is_some_and(|m| !m.is_empty())
    }

    /// The shopping-list key: measure and name joined by one space, trimmed
    ///
    /// Two ingredients are the same list entry iff their canonical strings are
    /// byte-equal, so "1 oz Lime" and "2 oz Lime" are distinct entries.
    pub fn canonical(&self) -> String {
        match self.measure.as_deref() {
            Some(measure) if self.has_measure() => {
                format!("{} {}", measure, self.name).trim().to_string()
            }
            _ => self.name.trim().to_string(),
        }
    }

    /// Display text for a result card, with the measure converted to `system`
    pub fn display_with(&self, system: MeasurementSystem, converter: &MeasurementConverter) -> String {
        let measure = converter.convert(self.measure.as_deref(), system);
        if measure.trim().is_empty() {
            self.name.trim().to_string()
        } else {
            format!("{} {}", measure.trim(), self.name.trim())
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl SearchResponse {
    /// The drinks of this response, empty when nothing matched
    pub fn into_records(self) -> Vec<RecipeRecord> {
        self.drinks.unwrap_or_default()
    }
}
