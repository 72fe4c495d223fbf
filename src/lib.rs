//! # Cocktail Shopping List
//!
//! Search a public cocktail catalog, view the results with measures in metric
//! or imperial units, and collect the ingredients of chosen drinks into a
//! printable shopping list.

pub mod catalog;
pub mod catalog_errors;
pub mod cli;
pub mod config;
pub mod ingredient_extractor;
pub mod localization;
pub mod measurement_converter;
pub mod measurement_patterns;
pub mod measurement_types;
pub mod printing;
pub mod recipe_card;
pub mod recipe_model;
pub mod shopping_list;
