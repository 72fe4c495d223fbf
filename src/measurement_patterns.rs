//! # Measurement Patterns Module
//!
//! This module contains regex patterns and constants used for measurement parsing.

use lazy_static::lazy_static;
use regex::Regex;

/// Leading amount followed by a unit remainder.
///
/// Alternation order matters: mixed numbers must be tried before plain integers
/// so "1 1/2 oz" is not read as "1" with unit "1/2 oz".
pub const AMOUNT_PATTERN: &str =
    r"^(\d+\s+\d+/\d+|\d+/\d+|\d+(?:\.\d+)?|\.\d+)\s*(.+)$";

/// Every unit alias the converter recognises, longest first.
pub const MEASURED_ITEM_UNITS: &[&str] = &[
    "tablespoons",
    "tablespoon",
    "teaspoons",
    "teaspoon",
    "ounces",
    "ounce",
    "spoons",
    "spoon",
    "fl oz",
    "tblsp",
    "cups",
    "tbsp",
    "cup",
    "tsp",
    "oz",
];

/// Build the pattern locating a measure at the start of a combined "measure name" string
pub fn measured_item_pattern(units: &[&str]) -> String {
    let alternatives = units
        .iter()
        .map(|unit| regex::escape(unit))
        .collect::<Vec<String>>()
        .join("|");
    format!(r"(?i)^(.*?\b(?:{alternatives})\b)\s+(.+)$")
}

lazy_static! {
    pub static ref AMOUNT_REGEX: Regex =
        Regex::new(AMOUNT_PATTERN).expect("Amount pattern should be valid");
    pub static ref WHITESPACE_REGEX: Regex =
        Regex::new(r"\s+").expect("Whitespace pattern should be valid");
    pub static ref MEASURED_ITEM_REGEX: Regex =
        Regex::new(&measured_item_pattern(MEASURED_ITEM_UNITS))
            .expect("Measured item pattern should be valid");
}
