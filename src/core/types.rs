use serde::{Deserialize, Serialize};

use crate::core::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One input series: a column-aligned numeric sequence plus display metadata.
///
/// `data` is optional so that a deserialized dataset missing its values can
/// be reported as a configuration error rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<f64>>,
    #[serde(default)]
    pub fill_color: Option<Rgba>,
    #[serde(default)]
    pub highlight_color: Option<Rgba>,
    #[serde(default)]
    pub text_color: Option<Rgba>,
    #[serde(default)]
    pub tooltip_data: Option<String>,
}

impl Series {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: Some(label.into()),
            data: Some(data),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Rgba) -> Self {
        self.fill_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_highlight_color(mut self, color: Rgba) -> Self {
        self.highlight_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_text_color(mut self, color: Rgba) -> Self {
        self.text_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_tooltip_data(mut self, tooltip_data: impl Into<String>) -> Self {
        self.tooltip_data = Some(tooltip_data.into());
        self
    }
}

/// Chart input: one external label per column and the series to stack.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreamgraphData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Series>,
}

impl StreamgraphData {
    #[must_use]
    pub fn new(labels: Vec<String>, datasets: Vec<Series>) -> Self {
        Self { labels, datasets }
    }
}
