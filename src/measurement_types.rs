//! # Measurement Types Module
//!
//! This module defines the core types used for measurement parsing and conversion:
//! the target measurement system, the closed set of volume unit families, the
//! intermediate parsed quantity and the converter configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target unit convention for display conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Millilitres, centilitres and decilitres
    Metric,
    /// Ounces, cups, tablespoons and teaspoons
    #[default]
    Imperial,
}

impl MeasurementSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "metric",
            MeasurementSystem::Imperial => "imperial",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(MeasurementSystem::Metric),
            "imperial" => Ok(MeasurementSystem::Imperial),
            other => Err(format!("Unknown measurement system: {other}")),
        }
    }
}

/// Volume unit families recognised by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    /// Fluid ounces
    Ounce,
    /// Cups
    Cup,
    /// Tablespoons
    Tablespoon,
    /// Teaspoons
    Teaspoon,
}

impl VolumeUnit {
    /// Every family, in lookup order
    pub const ALL: [VolumeUnit; 4] = [
        VolumeUnit::Ounce,
        VolumeUnit::Cup,
        VolumeUnit::Tablespoon,
        VolumeUnit::Teaspoon,
    ];

    /// Lower-case spellings that map onto this family
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            VolumeUnit::Ounce => &["oz", "ounce", "ounces", "fl oz"],
            VolumeUnit::Cup => &["cup", "cups"],
            VolumeUnit::Tablespoon => &[
                "spoon",
                "spoons",
                "tblsp",
                "tbsp",
                "tablespoon",
                "tablespoons",
            ],
            VolumeUnit::Teaspoon => &["tsp", "teaspoon", "teaspoons"],
        }
    }

    /// Millilitres in one unit of this family
    pub fn ml_factor(&self) -> f64 {
        match self {
            VolumeUnit::Ounce => 29.5735,
            VolumeUnit::Cup => 236.588,
            VolumeUnit::Tablespoon => 14.7868,
            VolumeUnit::Teaspoon => 4.92892,
        }
    }

    /// Canonical imperial label used in converted output
    pub fn imperial_label(&self) -> &'static str {
        match self {
            VolumeUnit::Ounce => "oz",
            VolumeUnit::Cup => "cup",
            VolumeUnit::Tablespoon => "tbsp",
            VolumeUnit::Teaspoon => "tsp",
        }
    }

    /// Look up a family by exact (already case-folded and trimmed) alias
    pub fn from_alias(alias: &str) -> Option<VolumeUnit> {
        VolumeUnit::ALL
            .iter()
            .copied()
            .find(|unit| unit.aliases().contains(&alias))
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.imperial_label())
    }
}

/// Amount and unit pulled out of a free-text measure; never persisted
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuantity {
    /// Numeric amount (mixed numbers and fractions already evaluated)
    pub value: f64,
    /// Remainder of the measure text, lower-cased and trimmed
    pub unit: String,
}

/// Configuration options for measurement conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Whether metric output between 10 ml and the decilitre threshold is reported in centilitres
    pub use_centilitres: bool,
    /// Rounded millilitre value from which output switches to decilitres
    pub decilitre_threshold_ml: u32,
    /// Decimal places kept on imperial passthrough values before trailing zeros are stripped
    pub imperial_precision: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            use_centilitres: false,
            decilitre_threshold_ml: 100,
            imperial_precision: 2,
        }
    }
}
