use tracing::warn;

use crate::core::{Layer, StreamLayout, StreamScale, StreamgraphData, TextMeasurer, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, InteractionState};
use crate::render::{RenderFrame, Renderer};

use super::StreamgraphConfig;
use super::render_frame_builder::build_stream_frame;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `StreamgraphEngine` owns the layer collection, the value scale and the
/// hover state of one chart, and hands every draw pass to its renderer.
pub struct StreamgraphEngine<R: Renderer + TextMeasurer> {
    pub(super) renderer: R,
    pub(super) config: StreamgraphConfig,
    pub(super) data: StreamgraphData,
    pub(super) layout: StreamLayout,
    pub(super) scale: StreamScale,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer + TextMeasurer> StreamgraphEngine<R> {
    #[must_use]
    pub fn config(&self) -> &StreamgraphConfig {
        &self.config
    }

    #[must_use]
    pub fn data(&self) -> &StreamgraphData {
        &self.data
    }

    /// Layers in stacking order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layout.layers
    }

    #[must_use]
    pub fn baseline(&self) -> &[f64] {
        &self.layout.baseline
    }

    #[must_use]
    pub fn scale(&self) -> &StreamScale {
        &self.scale
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.scale.viewport()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Replaces the datasets and x labels, then recomputes and redraws.
    ///
    /// On failure the previous layout stays in place.
    pub fn set_data(&mut self, data: StreamgraphData) -> ChartResult<()> {
        let previous = std::mem::replace(&mut self.data, data);
        if let Err(err) = super::ChartLifecycle::update(self) {
            self.data = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        super::ChartLifecycle::draw(self)
    }

    /// Builds the next draw pass without handing it to the renderer.
    ///
    /// Refreshes the layers' pixel outlines, so hit testing reflects the
    /// returned frame.
    pub fn build_render_frame(&mut self) -> RenderFrame {
        build_stream_frame(
            &mut self.layout.layers,
            &self.scale,
            &self.config,
            &self.data.labels,
            &self.renderer,
        )
    }

    /// Legends are not produced for streamgraphs.
    pub fn generate_legend(&self) -> ChartResult<String> {
        Err(ChartError::Unsupported("streamgraph legend generation"))
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by host draw callbacks while keeping the renderer
    /// implementation decoupled from toolkit-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer
            .render_on_cairo_context(context, &frame)
            .inspect_err(|err| warn!(error = %err, "cairo context rejected streamgraph frame"))
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn draw_frame(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer
            .render(&frame)
            .inspect_err(|err| warn!(error = %err, "renderer rejected streamgraph frame"))
    }
}
