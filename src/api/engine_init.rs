use tracing::debug;

use crate::core::{
    ColorAssignment, StreamLayout, StreamScale, StreamgraphData, TextMeasurer, ValueRange,
    Viewport, compute_layout,
};
use crate::error::ChartResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{StreamgraphConfig, StreamgraphEngine};

impl<R: Renderer + TextMeasurer> StreamgraphEngine<R> {
    /// Creates a fully initialized engine and draws the first frame.
    ///
    /// Config and dataset errors abort before anything is drawn.
    pub fn new(renderer: R, config: StreamgraphConfig, data: StreamgraphData) -> ChartResult<Self> {
        let (layout, scale) = prepare(&config, &data, config.viewport)?;
        let mut engine = Self {
            renderer,
            config,
            data,
            layout,
            scale,
            interaction: InteractionState::default(),
        };
        engine.draw_frame()?;
        Ok(engine)
    }
}

/// Validates `config`, lays out `data` and builds the matching scale.
pub(super) fn prepare(
    config: &StreamgraphConfig,
    data: &StreamgraphData,
    viewport: Viewport,
) -> ChartResult<(StreamLayout, StreamScale)> {
    config.validate()?;
    let layout = compute_layout(&data.datasets, color_assignment(config))?;
    let scale = build_stream_scale(config, &layout, viewport)?;
    Ok((layout, scale))
}

fn color_assignment(config: &StreamgraphConfig) -> ColorAssignment<'_> {
    ColorAssignment {
        scheme: &config.colors,
        interpolation: config.color_interpolation,
        method: config.color_assignment_method,
        highlight_multiplier: config.color_highlight_multiplier,
    }
}

/// Value range from the override when set, otherwise symmetric around zero
/// over the layout's stacked extent.
pub(super) fn build_stream_scale(
    config: &StreamgraphConfig,
    layout: &StreamLayout,
    viewport: Viewport,
) -> ChartResult<StreamScale> {
    let range = match config.scale.scale_override {
        Some(scale_override) => ValueRange::from_override(scale_override),
        None => ValueRange::symmetric(layout.extent(), config.scale.divisions),
    };
    let scale = StreamScale::new(viewport, config.scale.padding, layout.columns, range)?;
    debug!(
        columns = layout.columns,
        range_min = range.min,
        range_max = range.max,
        steps = range.steps,
        "streamgraph scale built"
    );
    Ok(scale)
}
