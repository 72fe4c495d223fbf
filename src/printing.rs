//! Printable rendering of the shopping list.

use chrono::NaiveDate;

use crate::measurement_converter::MeasurementConverter;
use crate::measurement_types::MeasurementSystem;

pub const PRINT_TITLE: &str = "Shopping List";
pub const EMPTY_LIST_TEXT: &str = "Your shopping list is empty.";

/// Render the list as a plain-text document, measures converted to `system`
pub fn render_shopping_list(
    items: &[String],
    system: MeasurementSystem,
    converter: &MeasurementConverter,
    printed_on: NaiveDate,
) -> String {
    let mut output = String::new();
    output.push_str(PRINT_TITLE);
    output.push('\n');
    output.push_str(&format!("Printed {}\n\n", printed_on.format("%Y-%m-%d")));

    if items.is_empty() {
        output.push_str(EMPTY_LIST_TEXT);
        output.push('\n');
        return output;
    }

    for item in items {
        output.push_str(&format!("- {}\n", converter.format_measured_item(item, system)));
    }

    output
}
