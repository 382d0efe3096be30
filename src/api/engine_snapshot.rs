use serde::Serialize;

use crate::core::{Rgba, TextMeasurer, ValueRange, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::HoverState;
use crate::render::Renderer;

use super::StreamgraphEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub columns: usize,
    pub baseline: Vec<f64>,
    pub value_range: ValueRange,
    pub hover: HoverState,
    pub layers: Vec<LayerSnapshot>,
}

/// Stacked interval and colors of one layer, in stacking order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSnapshot {
    pub series_index: usize,
    pub label: Option<String>,
    pub onset: usize,
    pub sum: f64,
    pub max_width: f64,
    pub y0: Vec<f64>,
    pub y1: Vec<f64>,
    pub color: Rgba,
    pub hover_color: Rgba,
}

impl<R: Renderer + TextMeasurer> StreamgraphEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.scale.viewport(),
            columns: self.layout.columns,
            baseline: self.layout.baseline.clone(),
            value_range: self.scale.range(),
            hover: self.interaction.hover(),
            layers: self
                .layout
                .layers
                .iter()
                .map(|layer| LayerSnapshot {
                    series_index: layer.series_index,
                    label: layer.label.clone(),
                    onset: layer.onset,
                    sum: layer.sum,
                    max_width: layer.max_width,
                    y0: layer.data.iter().map(|datum| datum.y0).collect(),
                    y1: layer.data.iter().map(|datum| datum.y1).collect(),
                    color: layer.color,
                    hover_color: layer.hover_color,
                })
                .collect(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
