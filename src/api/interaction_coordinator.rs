use tracing::debug;

use crate::core::{ColumnScale, PixelPoint, TextMeasurer, hit_test_layers};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, HoverTransition, apply_hover_flags};
use crate::render::Renderer;

use super::StreamgraphEngine;
use super::tooltip::{TooltipPayload, render_tooltip_template, tooltip_fields};

/// Result of feeding one pointer event to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerOutcome {
    pub hover: HoverState,
    /// A frame was drawn because the hovered layer or column changed.
    pub redrawn: bool,
    /// Present only when the hover moved onto a layer.
    pub tooltip: Option<TooltipPayload>,
}

impl PointerOutcome {
    fn unchanged(hover: HoverState) -> Self {
        Self {
            hover,
            redrawn: false,
            tooltip: None,
        }
    }
}

pub(super) struct InteractionCoordinator;

impl InteractionCoordinator {
    pub(super) fn pointer_move<R: Renderer + TextMeasurer>(
        engine: &mut StreamgraphEngine<R>,
        x: f64,
        y: f64,
    ) -> ChartResult<PointerOutcome> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        if !engine.config.hover_enabled() {
            return Ok(PointerOutcome::unchanged(engine.interaction.hover()));
        }

        let hit = hit_test_layers(&engine.layout.layers, &engine.scale, PixelPoint { x, y });
        let transition = engine.interaction.on_pointer_move(x, y, hit);
        let HoverTransition::Changed { previous, current } = transition else {
            return Ok(PointerOutcome::unchanged(engine.interaction.hover()));
        };

        debug!(
            previous_layer = ?previous.layer_index,
            layer = ?current.layer_index,
            column = ?current.column_index,
            "streamgraph hover changed"
        );
        apply_hover_flags(&mut engine.layout.layers, current);
        engine.draw_frame()?;

        Ok(PointerOutcome {
            hover: current,
            redrawn: true,
            tooltip: tooltip_payload(engine, current, y),
        })
    }

    pub(super) fn pointer_leave<R: Renderer + TextMeasurer>(
        engine: &mut StreamgraphEngine<R>,
    ) -> ChartResult<bool> {
        if !engine.interaction.on_pointer_leave().needs_redraw() {
            return Ok(false);
        }
        apply_hover_flags(&mut engine.layout.layers, HoverState::default());
        engine.draw_frame()?;
        Ok(true)
    }
}

fn tooltip_payload<R: Renderer + TextMeasurer>(
    engine: &StreamgraphEngine<R>,
    hover: HoverState,
    pointer_y: f64,
) -> Option<TooltipPayload> {
    let (Some(layer_index), Some(column_index)) = (hover.layer_index, hover.column_index) else {
        return None;
    };
    let layer = engine.layout.layers.get(layer_index)?;
    let x_label = engine.data.labels.get(column_index).map(String::as_str);
    let fields = tooltip_fields(layer, column_index, x_label);
    let style = engine.config.tooltip.clone();

    Some(TooltipPayload {
        x: engine.scale.calculate_x(column_index),
        y: pointer_y,
        layer_index,
        column_index,
        title: layer.label.clone(),
        text: render_tooltip_template(&style.template, &fields),
        color: layer.hover_color,
        fields,
        style,
    })
}

impl<R: Renderer + TextMeasurer> StreamgraphEngine<R> {
    /// Resolves the layer under the pointer and redraws when it changed.
    ///
    /// Does nothing unless both tooltips and color highlighting are enabled.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<PointerOutcome> {
        InteractionCoordinator::pointer_move(self, x, y)
    }

    /// Clears hover; returns whether a frame was drawn.
    pub fn pointer_leave(&mut self) -> ChartResult<bool> {
        InteractionCoordinator::pointer_leave(self)
    }
}
