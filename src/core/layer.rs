use serde::{Deserialize, Serialize};

use crate::core::{BoundaryPoint, Rgba, Series};

/// One column of a layer.
///
/// `y0`/`y1` are the value-space bounds written by the stack pass
/// (`y1 = y0 + width`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerDatum {
    /// Index of the source series, kept to recover input order after reordering.
    pub series_index: usize,
    pub width: f64,
    pub y0: f64,
    pub y1: f64,
}

/// Per-series geometric and statistical record produced by the layout pipeline.
///
/// Statistics, stacking bounds, colors and drawn `points` are all overwritten
/// by each layout/draw pass. `hover` is the only field mutated between passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub series_index: usize,
    pub label: Option<String>,
    pub data: Vec<LayerDatum>,
    pub onset: usize,
    pub sum: f64,
    pub max_width: f64,
    pub max_width_index: usize,
    /// Previous max-holder at the moment `max_width_index` was last overwritten.
    pub second_width_index: usize,
    pub fill_color: Option<Rgba>,
    pub highlight_color: Option<Rgba>,
    pub text_color: Option<Rgba>,
    pub tooltip_data: Option<String>,
    pub color: Rgba,
    pub hover_color: Rgba,
    pub points: Vec<BoundaryPoint>,
    pub hover: bool,
}

impl Layer {
    #[must_use]
    pub fn from_series(series: &Series, series_index: usize) -> Self {
        let values = series.data.as_deref().unwrap_or_default();
        let data = values
            .iter()
            .map(|&width| LayerDatum {
                series_index,
                width,
                y0: 0.0,
                y1: 0.0,
            })
            .collect();

        Self {
            series_index,
            label: series.label.clone(),
            data,
            onset: 0,
            sum: 0.0,
            max_width: 0.0,
            max_width_index: 0,
            second_width_index: 0,
            fill_color: series.fill_color,
            highlight_color: series.highlight_color,
            text_color: series.text_color,
            tooltip_data: series.tooltip_data.clone(),
            color: Rgba::new(0, 0, 0, 0.0),
            hover_color: Rgba::new(0, 0, 0, 0.0),
            points: Vec::new(),
            hover: false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Recomputes `onset`, `sum`, and the max-width fields in one left-to-right pass.
    pub fn compute_stats(&mut self) {
        let mut onset_found = false;
        self.onset = 0;
        self.sum = 0.0;
        self.max_width = 0.0;
        self.max_width_index = 0;
        self.second_width_index = 0;

        for (index, datum) in self.data.iter().enumerate() {
            let width = datum.width;
            if !onset_found {
                self.onset = index;
            }
            if width > 0.0 {
                onset_found = true;
            }
            self.sum += width;
            // Non-strict: later ties take over.
            if width >= self.max_width {
                self.max_width = width;
                self.second_width_index = self.max_width_index;
                self.max_width_index = index;
            }
        }
    }
}

/// Builds one layer per series, in input order.
#[must_use]
pub fn build_layers(datasets: &[Series]) -> Vec<Layer> {
    datasets
        .iter()
        .enumerate()
        .map(|(index, series)| Layer::from_series(series, index))
        .collect()
}

pub fn compute_layer_stats(layers: &mut [Layer]) {
    for layer in layers {
        layer.compute_stats();
    }
}
