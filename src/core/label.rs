use serde::{Deserialize, Serialize};

use crate::core::{ColumnScale, Layer, LabelFont, PixelPoint, TextMeasurer};

/// Pixels kept free at the right canvas edge by max-height placement.
pub const LABEL_RIGHT_MARGIN_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelPlacementMethod {
    #[default]
    Ideal,
    IdealThenMaxHeight,
    MaxHeight,
}

/// Strategy that produced a placement; it decides text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelStrategy {
    /// Left-aligned, hanging from the top edge of the fitted span.
    Ideal,
    /// Centered on both axes at the layer's widest column.
    MaxHeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub position: PixelPoint,
    pub font_size: f64,
    pub strategy: LabelStrategy,
}

#[derive(Debug, Clone, Copy)]
pub struct LabelOptions<'a> {
    pub method: LabelPlacementMethod,
    pub fixed_size: Option<f64>,
    pub minimum_size: f64,
    pub font: &'a LabelFont,
    pub canvas_width: f64,
}

/// Chooses a label position for `layer` with the configured method.
///
/// Returns `None` when the layer has no title or nothing fits.
pub fn place_label(
    layer: &Layer,
    scale: &impl ColumnScale,
    measurer: &impl TextMeasurer,
    options: LabelOptions<'_>,
) -> Option<LabelPlacement> {
    let text = layer.label.as_deref().filter(|text| !text.is_empty())?;
    match options.method {
        LabelPlacementMethod::Ideal => ideal_label_placement(layer, text, scale, measurer, options),
        LabelPlacementMethod::MaxHeight => {
            max_height_label_placement(layer, text, scale, measurer, options)
        }
        LabelPlacementMethod::IdealThenMaxHeight => {
            ideal_label_placement(layer, text, scale, measurer, options)
                .or_else(|| max_height_label_placement(layer, text, scale, measurer, options))
        }
    }
}

/// Finds the largest font whose text fits inside the layer's drawn silhouette.
///
/// Each column is a candidate start. A candidate sized at half the local
/// height extends rightward one column at a time until the accumulated
/// width covers the text; it is rejected if any visited column no longer
/// contains the start span shrunk by a quarter of its height on each side.
/// Requires `layer.points` from a draw pass.
pub fn ideal_label_placement(
    layer: &Layer,
    text: &str,
    scale: &impl ColumnScale,
    measurer: &impl TextMeasurer,
    options: LabelOptions<'_>,
) -> Option<LabelPlacement> {
    let points = &layer.points;
    let value_width = scale.value_width();
    let mut selected: Option<PixelPoint> = None;
    let mut selected_size = 0.0;

    for (i, start) in points.iter().enumerate() {
        let current_height = start.bottom.y - start.top.y;
        let derived_height = current_height * 0.5;
        if derived_height < options.minimum_size
            || derived_height < selected_size
            || start.top.x < 0.0
        {
            continue;
        }

        let margin = current_height * 0.25;
        let top_bound = start.top.y + margin;
        let bottom_bound = start.bottom.y - margin;
        let required_width = measurer.measure_text_width(text, derived_height, options.font);

        let mut derived_width = 0.0;
        let mut out_of_bounds = false;
        let mut probe = start;
        let mut j = i + 1;
        while derived_width < required_width
            && !out_of_bounds
            && j < points.len()
            && probe.top.x < options.canvas_width
        {
            probe = &points[j];
            if probe.bottom.y < bottom_bound || probe.top.y > top_bound {
                out_of_bounds = true;
            }
            derived_width += value_width;
            j += 1;
        }

        if derived_width > required_width && !out_of_bounds {
            selected = Some(PixelPoint::new(start.top.x, top_bound));
            selected_size = derived_height;
        }
    }

    selected.map(|position| LabelPlacement {
        position,
        font_size: options.fixed_size.unwrap_or(selected_size),
        strategy: LabelStrategy::Ideal,
    })
}

/// Anchors the label at the layer's widest column, vertically centered.
///
/// Without a fixed size the font scales with the pixel width of that column
/// and must reach the minimum size.
pub fn max_height_label_placement(
    layer: &Layer,
    text: &str,
    scale: &impl ColumnScale,
    measurer: &impl TextMeasurer,
    options: LabelOptions<'_>,
) -> Option<LabelPlacement> {
    let column = layer.max_width_index;
    let datum = layer.data.get(column)?;
    let x = scale.calculate_x(column);
    let y = scale.calculate_y(datum.y0 + datum.width * 0.5);

    let font_size = match options.fixed_size {
        Some(size) => size,
        None => {
            let pixels_per_unit = scale.calculate_y(1.0) - scale.calculate_y(0.0);
            let size = pixels_per_unit * datum.width * 0.4;
            if size < options.minimum_size {
                return None;
            }
            size
        }
    };

    let text_width = measurer.measure_text_width(text, font_size, options.font);
    let x = adjust_x_to_fit(x, text_width, options.canvas_width - LABEL_RIGHT_MARGIN_PX);
    Some(LabelPlacement {
        position: PixelPoint::new(x, y),
        font_size,
        strategy: LabelStrategy::MaxHeight,
    })
}

/// Shifts `x` left in whole text widths until `x + text_width` fits.
#[must_use]
pub fn adjust_x_to_fit(mut x: f64, text_width: f64, graph_width: f64) -> f64 {
    if !text_width.is_finite() || text_width <= 0.0 || !x.is_finite() {
        return x;
    }
    while x + text_width > graph_width {
        x -= text_width;
    }
    x
}
