use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{Layer, Rgba};

use super::TooltipConfig;

const TEMPLATE_OPEN: &str = "<%=";
const TEMPLATE_CLOSE: &str = "%>";

/// Everything the host's tooltip widget needs for one hovered layer/column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipPayload {
    /// Anchor: the hovered column's x and the pointer's y.
    pub x: f64,
    pub y: f64,
    pub layer_index: usize,
    pub column_index: usize,
    pub title: Option<String>,
    pub text: String,
    pub color: Rgba,
    pub fields: IndexMap<String, String>,
    pub style: TooltipConfig,
}

/// Rounds to two decimals, half away from zero.
#[must_use]
pub fn rounded_two_digits(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a number without a trailing `.0` and without negative zero.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Template fields for `layer` at `column`, in a stable order.
#[must_use]
pub fn tooltip_fields(
    layer: &Layer,
    column: usize,
    x_label: Option<&str>,
) -> IndexMap<String, String> {
    let value = layer.data.get(column).map_or(0.0, |datum| datum.width);
    let mut fields = IndexMap::with_capacity(6);
    fields.insert("x".to_owned(), column.to_string());
    fields.insert("xLabel".to_owned(), x_label.unwrap_or_default().to_owned());
    fields.insert("value".to_owned(), format_number(rounded_two_digits(value)));
    fields.insert("sum".to_owned(), format_number(rounded_two_digits(layer.sum)));
    fields.insert(
        "maxWidth".to_owned(),
        format_number(rounded_two_digits(layer.max_width)),
    );
    fields.insert(
        "tooltipData".to_owned(),
        layer.tooltip_data.clone().unwrap_or_default(),
    );
    fields
}

/// Substitutes `<%= key %>` tokens. Unknown keys render empty; an unclosed
/// token is kept verbatim.
#[must_use]
pub fn render_tooltip_template(template: &str, fields: &IndexMap<String, String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(TEMPLATE_OPEN) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + TEMPLATE_OPEN.len()..];
        let Some(end) = after_open.find(TEMPLATE_CLOSE) else {
            output.push_str(&rest[start..]);
            return output;
        };
        let key = after_open[..end].trim();
        if let Some(value) = fields.get(key) {
            output.push_str(value);
        }
        rest = &after_open[end + TEMPLATE_CLOSE.len()..];
    }
    output.push_str(rest);
    output
}
