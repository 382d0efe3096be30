use crate::core::{HeuristicTextMeasurer, LabelFont, TextMeasurer};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced. Text is measured with the 0.6em heuristic.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_path_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_path_count = frame.path_count();
        self.last_line_count = frame.line_count();
        self.last_text_count = frame.text_count();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}

impl TextMeasurer for NullRenderer {
    fn measure_text_width(&self, text: &str, size_px: f64, font: &LabelFont) -> f64 {
        HeuristicTextMeasurer.measure_text_width(text, size_px, font)
    }
}
