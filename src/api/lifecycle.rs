use tracing::debug;

use crate::core::{StreamgraphData, TextMeasurer, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::engine_init::{build_stream_scale, prepare};
use super::{StreamgraphConfig, StreamgraphEngine};

/// Capability surface a host drives a chart through.
pub trait ChartLifecycle {
    /// Replaces data and config, recomputes the layout and draws.
    fn initialize(&mut self, data: StreamgraphData, config: StreamgraphConfig) -> ChartResult<()>;

    /// Draws the current layout.
    fn draw(&mut self) -> ChartResult<()>;

    /// Recomputes the layout from the current data and draws.
    fn update(&mut self) -> ChartResult<()>;

    /// Rebuilds the value scale for new x labels; does not draw.
    fn build_scale(&mut self, labels: Vec<String>) -> ChartResult<()>;

    /// Resizes the drawing area and draws.
    fn reflow(&mut self, viewport: Viewport) -> ChartResult<()>;
}

impl<R: Renderer + TextMeasurer> ChartLifecycle for StreamgraphEngine<R> {
    fn initialize(&mut self, data: StreamgraphData, config: StreamgraphConfig) -> ChartResult<()> {
        let (layout, scale) = prepare(&config, &data, config.viewport)?;
        self.config = config;
        self.data = data;
        self.layout = layout;
        self.scale = scale;
        self.interaction.reset();
        self.draw()
    }

    fn draw(&mut self) -> ChartResult<()> {
        self.draw_frame()
    }

    fn update(&mut self) -> ChartResult<()> {
        let (layout, scale) = prepare(&self.config, &self.data, self.scale.viewport())?;
        self.layout = layout;
        self.scale = scale;
        self.interaction.reset();
        self.draw()
    }

    fn build_scale(&mut self, labels: Vec<String>) -> ChartResult<()> {
        self.scale = build_stream_scale(&self.config, &self.layout, self.scale.viewport())?;
        self.data.labels = labels;
        Ok(())
    }

    fn reflow(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.scale = self.scale.resized(viewport)?;
        debug!(
            width = viewport.width,
            height = viewport.height,
            "streamgraph reflowed"
        );
        self.draw()
    }
}
