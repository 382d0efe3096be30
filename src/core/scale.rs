use serde::{Deserialize, Serialize};

use crate::core::{StackedExtent, Viewport};
use crate::error::{ChartError, ChartResult};

/// Column/value to pixel mapping consumed by drawing, labels and hit testing.
pub trait ColumnScale {
    /// Pixel x of a column.
    fn calculate_x(&self, column: usize) -> f64;
    /// Pixel y of a value-space coordinate.
    fn calculate_y(&self, value: f64) -> f64;
    /// Pixel distance between adjacent columns.
    fn value_width(&self) -> f64;
    /// Pixel x where column 0 sits.
    fn plot_left(&self) -> f64;
}

/// Fixed value range that replaces the computed symmetric one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleOverride {
    pub steps: u32,
    pub step_width: f64,
    pub start_value: f64,
}

/// Value-axis range as the scale stores it.
///
/// The chart is drawn upside down relative to a regular value axis: `min`
/// is the value at the bottom of the plot, so for a symmetric range
/// `min = +V` and `max = -V`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub steps: u32,
    pub step_value: f64,
}

impl ValueRange {
    /// Symmetric range `±floor(max(|min|, |max|) * 1.5)` split into `divisions`.
    ///
    /// A degenerate extent (no layers, all zeros) falls back to `±1` so the
    /// pixel mapping stays finite.
    #[must_use]
    pub fn symmetric(extent: Option<StackedExtent>, divisions: u32) -> Self {
        let magnitude = extent.map_or(0.0, |extent| extent.min.abs().max(extent.max.abs()));
        let mut value = (magnitude * 1.5).floor();
        if !value.is_finite() || value <= 0.0 {
            value = 1.0;
        }
        let steps = divisions.max(1);
        Self {
            min: value,
            max: -value,
            steps,
            step_value: (-value - value) / f64::from(steps),
        }
    }

    /// Range taken from an explicit override, flipped like the computed one.
    #[must_use]
    pub fn from_override(scale_override: ScaleOverride) -> Self {
        let steps = scale_override.steps.max(1);
        let step_value = -scale_override.step_width.abs();
        let min = -scale_override.start_value;
        Self {
            min,
            max: min + f64::from(steps) * step_value,
            steps,
            step_value,
        }
    }

    /// Tick values from `min` to `max`, `steps + 1` of them.
    #[must_use]
    pub fn ticks(&self) -> Vec<f64> {
        (0..=self.steps)
            .map(|step| self.min + f64::from(step) * self.step_value)
            .collect()
    }
}

/// Plot-area insets from the canvas edges, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPadding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotPadding {
    fn default() -> Self {
        Self {
            left: 50.0,
            right: 20.0,
            top: 10.0,
            bottom: 30.0,
        }
    }
}

/// Default `ColumnScale`: evenly spaced columns over the padded plot width
/// and a linear value axis over the padded plot height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StreamScale {
    viewport: Viewport,
    padding: PlotPadding,
    columns: usize,
    range: ValueRange,
}

impl StreamScale {
    pub fn new(
        viewport: Viewport,
        padding: PlotPadding,
        columns: usize,
        range: ValueRange,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !range.min.is_finite() || !range.max.is_finite() || range.min == range.max {
            return Err(ChartError::InvalidData(
                "value range must be finite and non-zero".to_owned(),
            ));
        }

        let scale = Self {
            viewport,
            padding,
            columns,
            range,
        };
        if scale.inner_width() <= 0.0 || scale.end_point() <= scale.start_point() {
            return Err(ChartError::InvalidConfig(format!(
                "plot padding leaves no drawing area in a {}x{} viewport",
                viewport.width, viewport.height
            )));
        }
        Ok(scale)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn padding(&self) -> PlotPadding {
        self.padding
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    #[must_use]
    pub fn inner_width(&self) -> f64 {
        f64::from(self.viewport.width) - (self.padding.left + self.padding.right)
    }

    /// Pixel y of the top of the plot area.
    #[must_use]
    pub fn start_point(&self) -> f64 {
        self.padding.top
    }

    /// Pixel y of the bottom of the plot area.
    #[must_use]
    pub fn end_point(&self) -> f64 {
        f64::from(self.viewport.height) - self.padding.bottom
    }

    /// Returns a copy resized to `viewport`, keeping columns and range.
    pub fn resized(self, viewport: Viewport) -> ChartResult<Self> {
        Self::new(viewport, self.padding, self.columns, self.range)
    }
}

impl ColumnScale for StreamScale {
    fn calculate_x(&self, column: usize) -> f64 {
        self.padding.left + self.value_width() * column as f64
    }

    fn calculate_y(&self, value: f64) -> f64 {
        let scaling = (self.start_point() - self.end_point()) / (self.range.min - self.range.max);
        self.end_point() - scaling * (value - self.range.min)
    }

    fn value_width(&self) -> f64 {
        self.inner_width() / self.columns.saturating_sub(1).max(1) as f64
    }

    fn plot_left(&self) -> f64 {
        self.padding.left
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn padding() -> PlotPadding {
        PlotPadding {
            left: 10.0,
            right: 10.0,
            top: 0.0,
            bottom: 0.0,
        }
    }

    #[test]
    fn symmetric_range_is_flipped_and_padded() {
        let range = ValueRange::symmetric(Some(StackedExtent { min: 2.0, max: -5.0 }), 6);
        assert_eq!(range.min, 7.0);
        assert_eq!(range.max, -7.0);
        assert_eq!(range.steps, 6);
        assert_relative_eq!(range.step_value, -14.0 / 6.0);
        let ticks = range.ticks();
        assert_eq!(ticks.len(), 7);
        assert_relative_eq!(ticks[6], -7.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_extent_falls_back_to_unit_range() {
        let range = ValueRange::symmetric(None, 4);
        assert_eq!((range.min, range.max), (1.0, -1.0));
        let zero = ValueRange::symmetric(Some(StackedExtent { min: 0.0, max: 0.0 }), 4);
        assert_eq!((zero.min, zero.max), (1.0, -1.0));
    }

    #[test]
    fn override_is_flipped() {
        let range = ValueRange::from_override(ScaleOverride {
            steps: 4,
            step_width: 5.0,
            start_value: -10.0,
        });
        assert_eq!(range.min, 10.0);
        assert_eq!(range.step_value, -5.0);
        assert_eq!(range.max, -10.0);
    }

    #[test]
    fn larger_values_map_lower_on_canvas() {
        let range = ValueRange::symmetric(Some(StackedExtent { min: 4.0, max: -4.0 }), 6);
        let scale = StreamScale::new(Viewport::new(220, 120), padding(), 3, range).expect("scale");

        assert_relative_eq!(scale.calculate_y(range.min), 120.0);
        assert_relative_eq!(scale.calculate_y(range.max), 0.0);
        assert_relative_eq!(scale.calculate_y(0.0), 60.0);
        assert!(scale.calculate_y(1.0) > scale.calculate_y(0.0));
    }

    #[test]
    fn columns_are_evenly_spaced_over_inner_width() {
        let range = ValueRange::symmetric(None, 6);
        let scale = StreamScale::new(Viewport::new(220, 120), padding(), 3, range).expect("scale");
        assert_relative_eq!(scale.value_width(), 100.0);
        assert_relative_eq!(scale.calculate_x(0), 10.0);
        assert_relative_eq!(scale.calculate_x(2), 210.0);

        let single = StreamScale::new(Viewport::new(220, 120), padding(), 1, range).expect("scale");
        assert_relative_eq!(single.value_width(), 200.0);
    }

    #[test]
    fn rejects_padding_larger_than_viewport() {
        let range = ValueRange::symmetric(None, 6);
        let err = StreamScale::new(Viewport::new(15, 120), padding(), 3, range)
            .expect_err("no drawing area");
        assert!(format!("{err}").contains("no drawing area"));
        assert!(StreamScale::new(Viewport::new(0, 10), padding(), 3, range).is_err());
    }
}
