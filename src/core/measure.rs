//! Text measurement hook for label placement.
//!
//! Label fitting needs single-line text widths before anything is drawn, so
//! the drawing surface exposes a measurer alongside its `Renderer`.

use serde::{Deserialize, Serialize};

/// Font family and style used for label text; the size varies per label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFont {
    pub family: String,
    pub style: String,
}

impl LabelFont {
    /// CSS-like font shorthand, e.g. `normal 12px sans-serif`.
    #[must_use]
    pub fn font_string(&self, size_px: f64) -> String {
        format!("{} {}px {}", self.style, size_px, self.family)
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        Self {
            family: "\"HelveticaNeue-Light\", \"Helvetica Neue Light\", \"Helvetica Neue\", \
                     Helvetica, Arial, \"Lucida Grande\", sans-serif"
                .to_owned(),
            style: "normal".to_owned(),
        }
    }
}

pub trait TextMeasurer {
    /// Width in pixels of `text` laid out on a single line.
    fn measure_text_width(&self, text: &str, size_px: f64, font: &LabelFont) -> f64;
}

/// Measurer assuming an average glyph width of 0.6em.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure_text_width(&self, text: &str, size_px: f64, _font: &LabelFont) -> f64 {
        0.6 * size_px * text.chars().count() as f64
    }
}
