use serde::{Deserialize, Serialize};

use crate::core::{
    ColorAssignmentMethod, ColorInterpolation, LabelFont, LabelPlacementMethod, PlotPadding, Rgba,
    ScaleOverride, Viewport,
};
use crate::error::{ChartError, ChartResult};

const DEFAULT_UI_FONT_FAMILY: &str = "'Helvetica Neue', 'Helvetica', 'Arial', sans-serif";

/// Silhouette outline drawn around every layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub enabled: bool,
    pub width: f64,
    pub color: Rgba,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 2.0,
            color: Rgba::opaque(255, 255, 255),
        }
    }
}

/// Value axis, grid and axis-label settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    pub show_scale: bool,
    pub show_labels: bool,
    pub divisions: u32,
    /// Explicit value range; replaces the symmetric one computed from the layout.
    pub scale_override: Option<ScaleOverride>,
    pub padding: PlotPadding,
    pub line_color: Rgba,
    pub line_width: f64,
    pub show_grid_lines: bool,
    pub grid_line_color: Rgba,
    pub grid_line_width: f64,
    pub show_horizontal_lines: bool,
    pub show_vertical_lines: bool,
    pub font_size: f64,
    pub font_color: Rgba,
    pub font_family: String,
    pub font_style: String,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            show_scale: true,
            show_labels: true,
            divisions: 6,
            scale_override: None,
            padding: PlotPadding::default(),
            line_color: Rgba::new(0, 0, 0, 0.1),
            line_width: 1.0,
            show_grid_lines: true,
            grid_line_color: Rgba::new(0, 0, 0, 0.1),
            grid_line_width: 1.0,
            show_horizontal_lines: true,
            show_vertical_lines: true,
            font_size: 12.0,
            font_color: Rgba::opaque(102, 102, 102),
            font_family: DEFAULT_UI_FONT_FAMILY.to_owned(),
            font_style: "normal".to_owned(),
        }
    }
}

/// In-chart layer title settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub enabled: bool,
    pub placement_method: LabelPlacementMethod,
    /// Forces every label to this size instead of fitting it.
    pub fixed_size: Option<f64>,
    /// Fitted labels smaller than this are skipped; `0` disables the limit.
    pub minimum_size: f64,
    pub font: LabelFont,
    pub color: Rgba,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            placement_method: LabelPlacementMethod::default(),
            fixed_size: None,
            minimum_size: 12.0,
            font: LabelFont::default(),
            color: Rgba::new(64, 64, 64, 0.5),
        }
    }
}

/// Tooltip template and the style handed to the host's tooltip widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub enabled: bool,
    /// Text with `<%= key %>` placeholders; keys are `x`, `xLabel`, `value`,
    /// `sum`, `maxWidth` and `tooltipData`.
    pub template: String,
    pub fill_color: Rgba,
    pub font_color: Rgba,
    pub font_size: f64,
    pub font_family: String,
    pub font_style: String,
    pub title_font_color: Rgba,
    pub title_font_size: f64,
    pub title_font_style: String,
    pub x_padding: f64,
    pub y_padding: f64,
    pub x_offset: f64,
    pub corner_radius: f64,
    pub key_background: Rgba,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            template: "x:<%= xLabel %> y:<%= value %>".to_owned(),
            fill_color: Rgba::new(0, 0, 0, 0.8),
            font_color: Rgba::opaque(255, 255, 255),
            font_size: 14.0,
            font_family: DEFAULT_UI_FONT_FAMILY.to_owned(),
            font_style: "normal".to_owned(),
            title_font_color: Rgba::opaque(255, 255, 255),
            title_font_size: 14.0,
            title_font_style: "bold".to_owned(),
            x_padding: 6.0,
            y_padding: 6.0,
            x_offset: 10.0,
            corner_radius: 6.0,
            key_background: Rgba::opaque(255, 255, 255),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Validated once when the engine is built and then read-only for the
/// engine's lifetime. Serializable so host applications can persist chart
/// setup; colors round-trip as CSS strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamgraphConfig {
    pub viewport: Viewport,
    #[serde(default = "default_background_color")]
    pub background_color: Rgba,
    #[serde(default)]
    pub stroke: StrokeStyle,
    #[serde(default)]
    pub scale: ScaleConfig,
    #[serde(default = "default_curve")]
    pub curve: bool,
    #[serde(default = "default_curve_tension")]
    pub curve_tension: f64,
    #[serde(default)]
    pub color_interpolation: ColorInterpolation,
    #[serde(default = "default_colors")]
    pub colors: Vec<Rgba>,
    #[serde(default = "default_color_highlight")]
    pub color_highlight: bool,
    #[serde(default = "default_color_highlight_multiplier")]
    pub color_highlight_multiplier: f64,
    #[serde(default)]
    pub color_assignment_method: ColorAssignmentMethod,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub tooltip: TooltipConfig,
}

impl StreamgraphConfig {
    /// Creates a config with default styling for `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background_color: default_background_color(),
            stroke: StrokeStyle::default(),
            scale: ScaleConfig::default(),
            curve: default_curve(),
            curve_tension: default_curve_tension(),
            color_interpolation: ColorInterpolation::default(),
            colors: default_colors(),
            color_highlight: default_color_highlight(),
            color_highlight_multiplier: default_color_highlight_multiplier(),
            color_assignment_method: ColorAssignmentMethod::default(),
            labels: LabelConfig::default(),
            tooltip: TooltipConfig::default(),
        }
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Rgba) -> Self {
        self.background_color = color;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: ScaleConfig) -> Self {
        self.scale = scale;
        self
    }

    /// Replaces the computed symmetric value range.
    #[must_use]
    pub fn with_scale_override(mut self, scale_override: ScaleOverride) -> Self {
        self.scale.scale_override = Some(scale_override);
        self
    }

    /// Enables bezier smoothing with the given tension, or straight segments.
    #[must_use]
    pub fn with_curve(mut self, curve: bool, tension: f64) -> Self {
        self.curve = curve;
        self.curve_tension = tension;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Rgba>, interpolation: ColorInterpolation) -> Self {
        self.colors = colors;
        self.color_interpolation = interpolation;
        self
    }

    #[must_use]
    pub fn with_color_assignment_method(mut self, method: ColorAssignmentMethod) -> Self {
        self.color_assignment_method = method;
        self
    }

    #[must_use]
    pub fn with_color_highlight(mut self, enabled: bool, multiplier: f64) -> Self {
        self.color_highlight = enabled;
        self.color_highlight_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LabelConfig) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_label_placement_method(mut self, method: LabelPlacementMethod) -> Self {
        self.labels.placement_method = method;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipConfig) -> Self {
        self.tooltip = tooltip;
        self
    }

    /// Hover tracking needs both tooltips and color highlighting.
    #[must_use]
    pub fn hover_enabled(&self) -> bool {
        self.tooltip.enabled && self.color_highlight
    }

    pub fn validate(&self) -> ChartResult<()> {
        super::validation::validate_config(self)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_background_color() -> Rgba {
    Rgba::opaque(255, 255, 255)
}

fn default_curve() -> bool {
    true
}

fn default_curve_tension() -> f64 {
    0.1
}

fn default_colors() -> Vec<Rgba> {
    vec![Rgba::new(220, 220, 220, 0.9), Rgba::new(151, 187, 205, 0.9)]
}

fn default_color_highlight() -> bool {
    true
}

fn default_color_highlight_multiplier() -> f64 {
    0.92
}
