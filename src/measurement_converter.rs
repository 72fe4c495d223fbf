//! # Measurement Converter Module
//!
//! This module parses free-text drink measures ("1 1/2 oz", "1/2 tsp", "2.5 cups")
//! and converts them between imperial and metric volume units for display.
//!
//! ## Features
//!
//! - Integer, decimal, simple fraction and mixed number amounts
//! - A closed set of volume unit families (ounce, cup, tablespoon, teaspoon)
//! - Metric output rescaled by magnitude (ml, optionally cl, dl)
//! - Best-effort behaviour: anything unparseable is returned unchanged
//!
//! ## Usage
//!
//! ```rust
//! use cocktails::measurement_converter::{convert_measurement, format_measured_item};
//! use cocktails::measurement_types::MeasurementSystem;
//!
//! assert_eq!(convert_measurement(Some("1 oz"), MeasurementSystem::Metric), "30 ml");
//! assert_eq!(convert_measurement(Some("a dash"), MeasurementSystem::Metric), "a dash");
//! assert_eq!(
//!     format_measured_item("2 oz Lime Juice", MeasurementSystem::Metric),
//!     "59 ml Lime Juice"
//! );
//! ```

use lazy_static::lazy_static;
use log::{debug, info, trace};
use regex::Regex;

use crate::measurement_patterns::{
    measured_item_pattern, AMOUNT_REGEX, MEASURED_ITEM_REGEX, WHITESPACE_REGEX,
};
use crate::measurement_types::{ConversionConfig, MeasurementSystem, ParsedQuantity, VolumeUnit};

lazy_static! {
    static ref DEFAULT_CONVERTER: MeasurementConverter = MeasurementConverter::default();
}

/// Converts drink measures between measurement systems
#[derive(Debug, Clone)]
pub struct MeasurementConverter {
    /// Pattern locating the leading measure inside a combined "measure name" string
    item_pattern: Regex,
    /// Configuration options
    config: ConversionConfig,
}

impl MeasurementConverter {
    /// Create a converter with the default configuration
    pub fn new() -> Self {
        debug!("Creating MeasurementConverter with default configuration");
        Self {
            item_pattern: MEASURED_ITEM_REGEX.clone(),
            config: ConversionConfig::default(),
        }
    }

    /// Create a converter with custom configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cocktails::measurement_converter::MeasurementConverter;
    /// use cocktails::measurement_types::{ConversionConfig, MeasurementSystem};
    ///
    /// let converter = MeasurementConverter::with_config(ConversionConfig {
    ///     use_centilitres: true,
    ///     ..Default::default()
    /// });
    /// assert_eq!(converter.convert(Some("1 oz"), MeasurementSystem::Metric), "3 cl");
    /// ```
    pub fn with_config(config: ConversionConfig) -> Self {
        info!(
            "Creating MeasurementConverter with custom config: centilitres={}, decilitre_threshold={}, imperial_precision={}",
            config.use_centilitres, config.decilitre_threshold_ml, config.imperial_precision
        );
        Self {
            item_pattern: MEASURED_ITEM_REGEX.clone(),
            config,
        }
    }

    /// Create a converter whose measured-item lookup only recognises the given unit spellings
    ///
    /// Conversion itself still goes through the full alias table, so a unit listed
    /// here that is not a known alias leaves the item unchanged.
    pub fn with_item_units(units: &[&str], config: ConversionConfig) -> Result<Self, regex::Error> {
        let pattern = measured_item_pattern(units);
        debug!("Using custom measured item pattern: {}", pattern);
        Ok(Self {
            item_pattern: Regex::new(&pattern)?,
            config,
        })
    }

    /// Convert a free-text measure into the target measurement system
    ///
    /// Returns an empty string for a missing or empty measure, and the original
    /// text when the amount cannot be parsed or the unit is not recognised.
    pub fn convert(&self, measure: Option<&str>, target: MeasurementSystem) -> String {
        let measure = match measure {
            Some(m) if !m.is_empty() => m,
            _ => return String::new(),
        };

        let Some(parsed) = parse_amount(measure) else {
            trace!("Measure '{}' has no leading amount, leaving unchanged", measure);
            return measure.to_string();
        };

        let Some(unit) = VolumeUnit::from_alias(&parsed.unit) else {
            trace!("Unit '{}' not recognised, leaving '{}' unchanged", parsed.unit, measure);
            return measure.to_string();
        };

        let converted = match target {
            MeasurementSystem::Imperial => format!(
                "{} {}",
                format_amount(parsed.value, self.config.imperial_precision),
                unit.imperial_label()
            ),
            MeasurementSystem::Metric => {
                let millilitres = parsed.value * unit.ml_factor();
                if !millilitres.is_finite() {
                    trace!("Measure '{}' overflows in millilitres, leaving unchanged", measure);
                    return measure.to_string();
                }
                self.to_metric(millilitres)
            }
        };

        debug!("Converted measure '{}' -> '{}' ({})", measure, converted, target);
        converted
    }

    /// Rescale a millilitre amount by magnitude
    fn to_metric(&self, millilitres: f64) -> String {
        let rounded = millilitres.round();

        if rounded >= f64::from(self.config.decilitre_threshold_ml) {
            format!("{:.0} dl", (rounded / 100.0).round())
        } else if self.config.use_centilitres && rounded >= 10.0 {
            format!("{:.0} cl", (rounded / 10.0).round())
        } else {
            format!("{:.0} ml", rounded)
        }
    }

    /// Convert the leading measure of a combined "measure name" shopping-list entry
    ///
    /// The item name after the measure is reattached unchanged. Entries without a
    /// recognised unit near the start pass through verbatim.
    pub fn format_measured_item(&self, item: &str, target: MeasurementSystem) -> String {
        match self.item_pattern.captures(item) {
            Some(captures) => {
                let measure = captures.get(1).map_or("", |m| m.as_str()).trim();
                let name = captures.get(2).map_or("", |m| m.as_str());
                let formatted = format!("{} {}", self.convert(Some(measure), target), name);
                trace!("Formatted measured item '{}' -> '{}'", item, formatted);
                formatted
            }
            None => item.to_string(),
        }
    }
}

impl Default for MeasurementConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a leading numeric amount and trailing unit from free text
///
/// # Examples
///
/// ```rust
/// use cocktails::measurement_converter::parse_amount;
///
/// let parsed = parse_amount("1 1/2 Oz").unwrap();
/// assert_eq!(parsed.value, 1.5);
/// assert_eq!(parsed.unit, "oz");
/// assert!(parse_amount("a dash").is_none());
/// ```
pub fn parse_amount(measure: &str) -> Option<ParsedQuantity> {
    let clean = WHITESPACE_REGEX.replace_all(measure.trim(), " ");
    let captures = AMOUNT_REGEX.captures(&clean)?;

    let amount = captures.get(1)?.as_str();
    let unit = captures.get(2)?.as_str().to_lowercase().trim().to_string();

    let value = if let Some((whole, fraction)) = amount.split_once(' ') {
        whole.parse::<f64>().ok()? + parse_fraction(fraction)?
    } else if amount.contains('/') {
        parse_fraction(amount)?
    } else {
        amount.parse::<f64>().ok()?
    };
    if !value.is_finite() {
        return None;
    }

    Some(ParsedQuantity { value, unit })
}

fn parse_fraction(fraction: &str) -> Option<f64> {
    let (numerator, denominator) = fraction.split_once('/')?;
    let numerator = numerator.trim().parse::<f64>().ok()?;
    let denominator = denominator.trim().parse::<f64>().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Find the unit family of a free-text measure, if it has one
pub fn recognized_unit(measure: &str) -> Option<VolumeUnit> {
    parse_amount(measure).and_then(|parsed| VolumeUnit::from_alias(&parsed.unit))
}

/// Render an amount with at most `precision` decimals and no trailing zeros
fn format_amount(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value);
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Convert a measure with the default converter
pub fn convert_measurement(measure: Option<&str>, target: MeasurementSystem) -> String {
    DEFAULT_CONVERTER.convert(measure, target)
}

/// Convert the measure of a combined shopping-list entry with the default converter
pub fn format_measured_item(item: &str, target: MeasurementSystem) -> String {
    DEFAULT_CONVERTER.format_measured_item(item, target)
}
