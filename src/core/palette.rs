use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Layer, Rgba};

/// How a color scheme is spread across layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorInterpolation {
    /// Linear blend between adjacent scheme entries.
    #[default]
    Gradient,
    /// Scheme entry `rank % len`.
    Cycle,
    /// Scheme entry `floor(rank * len / layer_count)`.
    Indexed,
}

/// Rank order used only for color assignment; stacking order is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorAssignmentMethod {
    /// Largest total first.
    Sum,
    /// Largest single-column width first.
    MaxHeight,
    #[default]
    StackingOrder,
}

/// Inputs of one color assignment pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAssignment<'a> {
    pub scheme: &'a [Rgba],
    pub interpolation: ColorInterpolation,
    pub method: ColorAssignmentMethod,
    pub highlight_multiplier: f64,
}

/// Returns layer indices in color-rank order.
///
/// Sorting is stable, so equal keys keep stacking order.
#[must_use]
pub fn layers_in_color_order(layers: &[Layer], method: ColorAssignmentMethod) -> Vec<usize> {
    let mut order: Vec<usize> = (0..layers.len()).collect();
    match method {
        ColorAssignmentMethod::MaxHeight => {
            order.sort_by_key(|&index| Reverse(OrderedFloat(layers[index].max_width)));
        }
        ColorAssignmentMethod::Sum => {
            order.sort_by_key(|&index| Reverse(OrderedFloat(layers[index].sum)));
        }
        ColorAssignmentMethod::StackingOrder => {}
    }
    order
}

/// Scheme color for a layer at `rank` out of `layer_count`.
///
/// Indices past the end of the scheme reuse its last entry. An empty scheme
/// yields transparent black.
#[must_use]
pub fn scheme_color(
    scheme: &[Rgba],
    interpolation: ColorInterpolation,
    rank: usize,
    layer_count: usize,
) -> Rgba {
    let Some(last_index) = scheme.len().checked_sub(1) else {
        return Rgba::new(0, 0, 0, 0.0);
    };

    match interpolation {
        ColorInterpolation::Gradient => {
            let scale_factor = if layer_count > 1 {
                last_index as f64 / (layer_count - 1) as f64
            } else {
                0.0
            };
            let position = rank as f64 * scale_factor;
            let lower = (position.floor() as usize).min(last_index);
            let fraction = position - lower as f64;
            let upper = (lower + 1).min(last_index);
            let from = scheme[lower].channels();
            let to = scheme[upper].channels();
            let [r, g, b, a]: [f64; 4] = std::array::from_fn(|channel| {
                to[channel] * fraction + from[channel] * (1.0 - fraction)
            });
            Rgba::from_channels(r, g, b, a)
        }
        ColorInterpolation::Cycle => scheme[rank % scheme.len()],
        ColorInterpolation::Indexed => {
            let scale_factor = scheme.len() as f64 / layer_count.max(1) as f64;
            let index = ((rank as f64 * scale_factor).floor() as usize).min(last_index);
            scheme[index]
        }
    }
}

/// Assigns `color` and `hover_color` to every layer.
///
/// Layers with an explicit fill keep it; their hover color is the explicit
/// highlight when given, else derived from the fill. Other layers take a
/// scheme color by rank. Derived hover colors scale RGB by the multiplier.
pub fn assign_colors(layers: &mut [Layer], assignment: ColorAssignment<'_>) {
    let layer_count = layers.len();
    let order = layers_in_color_order(layers, assignment.method);

    for (rank, index) in order.into_iter().enumerate() {
        let layer = &mut layers[index];
        let color = match layer.fill_color {
            Some(fill) => fill,
            None => scheme_color(assignment.scheme, assignment.interpolation, rank, layer_count),
        };
        let hover_color = match (layer.fill_color, layer.highlight_color) {
            (Some(_), Some(highlight)) => highlight,
            _ => color.scaled(assignment.highlight_multiplier),
        };
        layer.color = color;
        layer.hover_color = hover_color;
    }
}
