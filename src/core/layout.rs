use serde::Serialize;
use tracing::debug;

use crate::core::{
    ColorAssignment, Layer, Series, StackedExtent, apply_baseline, assign_colors, build_layers,
    compute_layer_stats, minimized_wiggle_baseline, reorder_layers_outward, stacked_extent,
    validate_datasets,
};
use crate::error::ChartResult;

/// Layers in stacking order plus the baseline they were stacked on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamLayout {
    pub layers: Vec<Layer>,
    pub baseline: Vec<f64>,
    pub columns: usize,
}

impl StreamLayout {
    /// Stacked extrema for configuring the value range.
    #[must_use]
    pub fn extent(&self) -> Option<StackedExtent> {
        stacked_extent(&self.layers)
    }
}

/// Runs the full layout pipeline over `datasets`.
///
/// Stages run in a fixed order: validate, build, statistics, outward
/// ordering, baseline, stacking, colors. Validation failures abort before
/// any layer is built.
pub fn compute_layout(
    datasets: &[Series],
    colors: ColorAssignment<'_>,
) -> ChartResult<StreamLayout> {
    let columns = validate_datasets(datasets)?;

    let mut layers = build_layers(datasets);
    compute_layer_stats(&mut layers);
    let mut layers = reorder_layers_outward(layers);

    let baseline = minimized_wiggle_baseline(&layers);
    apply_baseline(&mut layers, &baseline);
    assign_colors(&mut layers, colors);

    debug!(layer_count = layers.len(), columns, "streamgraph layout computed");
    Ok(StreamLayout {
        layers,
        baseline,
        columns,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ColorAssignmentMethod, ColorInterpolation, Rgba};
    use crate::error::{ChartError, ConfigurationError};

    const SCHEME: [Rgba; 2] = [Rgba::new(220, 220, 220, 0.9), Rgba::new(151, 187, 205, 0.9)];

    fn assignment() -> ColorAssignment<'static> {
        ColorAssignment {
            scheme: &SCHEME,
            interpolation: ColorInterpolation::Gradient,
            method: ColorAssignmentMethod::StackingOrder,
            highlight_multiplier: 0.92,
        }
    }

    #[test]
    fn stacks_from_baseline_outward() {
        let datasets = vec![
            Series::new("a", vec![1.0, 2.0, 3.0]),
            Series::new("b", vec![3.0, 2.0, 1.0]),
        ];
        let layout = compute_layout(&datasets, assignment()).expect("layout");

        assert_eq!(layout.columns, 3);
        assert_eq!(layout.layers[0].label.as_deref(), Some("a"));
        assert_eq!(layout.baseline, vec![1.5, 2.0, 2.5]);
        assert_eq!(layout.layers[0].data[0].y1, layout.baseline[0]);
        for column in 0..3 {
            assert_eq!(layout.layers[0].data[column].y0, layout.layers[1].data[column].y1);
        }
        assert_ne!(layout.layers[0].color, layout.layers[1].color);
    }

    #[test]
    fn validation_error_aborts_layout() {
        let err = compute_layout(&[], assignment()).expect_err("empty");
        assert!(matches!(
            err,
            ChartError::Configuration(ConfigurationError::EmptyDatasets)
        ));
    }
}
